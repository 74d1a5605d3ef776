//! Form layout shared by rendering and mouse hit-testing

use crate::state::{FeedbackField, SUBMIT_BUTTON_INDEX};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Widest the form panel grows
const PANEL_MAX_WIDTH: u16 = 72;
/// Tallest the form panel grows
const PANEL_MAX_HEIGHT: u16 = 28;

/// Screen areas of every element of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub panel: Rect,
    pub full_name: Rect,
    pub email: Rect,
    pub contact: Rect,
    pub subject: Rect,
    pub message: Rect,
    pub rating: Rect,
    pub button: Rect,
    pub help: Rect,
}

impl FormLayout {
    /// Compute the layout for a frame of the given size
    pub fn new(area: Rect) -> Self {
        let panel = centered(area, PANEL_MAX_WIDTH, PANEL_MAX_HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Full name + email
                Constraint::Length(3), // Contact
                Constraint::Length(3), // Subject
                Constraint::Min(5),    // Message
                Constraint::Length(3), // Rating
                Constraint::Length(3), // Submit button
                Constraint::Length(1), // Help text
            ])
            .margin(1)
            .split(panel);

        // Name and email sit side by side
        let pair = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        Self {
            panel,
            full_name: pair[0],
            email: pair[1],
            contact: rows[1],
            subject: rows[2],
            message: rows[3],
            rating: rows[4],
            button: rows[5],
            help: rows[6],
        }
    }

    pub fn field_area(&self, field: FeedbackField) -> Rect {
        match field {
            FeedbackField::FullName => self.full_name,
            FeedbackField::Email => self.email,
            FeedbackField::Contact => self.contact,
            FeedbackField::Subject => self.subject,
            FeedbackField::Message => self.message,
            FeedbackField::Rating => self.rating,
        }
    }

    /// Focus index (field or submit button) under a screen position
    pub fn target_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        if self.button.contains(pos) {
            return Some(SUBMIT_BUTTON_INDEX);
        }
        FeedbackField::ALL
            .into_iter()
            .find(|f| self.field_area(*f).contains(pos))
            .map(|f| f.index())
    }
}

/// Center a box of at most `width` x `height` inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
