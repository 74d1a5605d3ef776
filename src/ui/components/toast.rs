//! Toast notifications, stacked top-center

use crate::state::{Toast, ToastKind, ToastQueue};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a toast grows, borders included
const TOAST_MAX_WIDTH: u16 = 60;

/// Render every visible toast, oldest on top
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue) {
    let area = frame.area();
    let bottom = area.y.saturating_add(area.height);
    let mut y = area.y.saturating_add(1);

    for toast in toasts.iter() {
        // Room for at least one line between the borders
        let max_lines = usize::from(bottom.saturating_sub(y).saturating_sub(2));
        if max_lines == 0 {
            break;
        }

        let mut lines = wrap_text(&toast.message, usize::from(TOAST_MAX_WIDTH - 4));
        lines.truncate(max_lines);
        let content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = u16::try_from(content_width + 4)
            .unwrap_or(u16::MAX)
            .min(TOAST_MAX_WIDTH)
            .min(area.width);
        // Bounded by max_lines, which came from a u16
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

        let toast_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y,
            width,
            height,
        };
        render_toast(frame, toast_area, toast, lines);
        y = y.saturating_add(height);
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, lines: Vec<String>) {
    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };

    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines.join("\n"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bg(Color::Black))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(paragraph, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(wrap_text("✅ Thanks!", 56), vec!["✅ Thanks!"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_message_with_huge_line_count_is_clipped() {
        let mut queue = ToastQueue::default();
        queue.success(format!("✅ Thanks!{}", "\n".repeat(65_534)));
        queue.error("hidden below the first toast");

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, &queue))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Thanks!"));
        assert!(!text.contains("hidden below"));
    }

    #[test]
    fn test_long_single_word_stays_within_screen() {
        let mut queue = ToastQueue::default();
        queue.success("x".repeat(65_533));

        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, &queue))
            .unwrap();

        assert!(screen_text(&terminal).contains("xxxx"));
    }

    #[test]
    fn test_toasts_skipped_on_tiny_terminal() {
        let mut queue = ToastQueue::default();
        queue.success("✅ Thanks!");

        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        terminal
            .draw(|frame| render_toasts(frame, &queue))
            .unwrap();

        assert!(!screen_text(&terminal).contains("Thanks"));
    }
}
