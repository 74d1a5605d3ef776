//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    forms::draw_feedback_form(frame, area, app);

    // Toasts float above the form
    components::render_toasts(frame, &app.state.toasts);
}
