//! Feedback form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FeedbackField;
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Label on the submit button while idle
pub const SUBMIT_LABEL: &str = "Submit Feedback";
/// Label on the submit button while a request is in flight
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Draw the feedback form into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let layout = FormLayout::new(area);
    let form = &app.state.form;

    let block = Block::default()
        .title(" Feedback Form ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    frame.render_widget(block, layout.panel);

    let active = form.active();
    for field in FeedbackField::ALL {
        draw_field(
            frame,
            layout.field_area(field),
            form.field(field),
            active == Some(field),
        );
    }

    let label = match app.state.spinner_frame() {
        Some(spinner) => format!("{spinner} {SUBMITTING_LABEL}"),
        None => SUBMIT_LABEL.to_string(),
    };
    render_button(
        frame,
        layout.button,
        &label,
        form.is_submit_button_active(),
        app.state.is_submit_enabled(),
    );

    draw_help_text(
        frame,
        layout.help,
        &[
            ("Tab", "next field"),
            ("←/→", "adjust"),
            (SUBMIT_SHORTCUT, "submit"),
            ("Esc", "dismiss"),
            ("Ctrl+C", "quit"),
        ],
    );
}
