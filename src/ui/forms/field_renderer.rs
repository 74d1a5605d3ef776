//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField, MAX_RATING};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Track cells per rating step
const SLIDER_STEP_WIDTH: usize = 4;

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn cursor_span(is_active: bool) -> Span<'static> {
    Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    )
}

fn placeholder_span(field: &FormField) -> Span<'_> {
    Span::styled(
        field.placeholder.as_str(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Draw a form field, dispatching on its kind
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    match field.value {
        FieldValue::Text(_) => draw_text_field(frame, area, field, is_active),
        FieldValue::Subject(_) => draw_select_field(frame, area, field, is_active),
        FieldValue::Rating(_) => draw_slider_field(frame, area, field, is_active),
    }
}

/// Draw a single- or multi-line text input
fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value = field.as_text();
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor_span(is_active),
            placeholder_span(field),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span(is_active));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, text_style),
            cursor_span(is_active),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a select showing the chosen option or its placeholder
fn draw_select_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let chosen = match field.as_subject() {
        Some(subject) => Span::styled(subject.label(), Style::default().fg(Color::White)),
        None => placeholder_span(field),
    };

    let line = Line::from(vec![
        Span::styled("◂ ", arrow_style),
        chosen,
        Span::styled(" ▸", arrow_style),
    ]);

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the rating slider with its live readout
fn draw_slider_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let rating = field.as_rating() as usize;
    let filled = rating * SLIDER_STEP_WIDTH;
    let empty = (MAX_RATING as usize - rating) * SLIDER_STEP_WIDTH;

    let track_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled("━".repeat(filled), track_style),
        Span::styled("●", track_style.add_modifier(Modifier::BOLD)),
        Span::styled("─".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(field.display_value(), Style::default().fg(Color::Gray)),
    ]);

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a single line of key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
