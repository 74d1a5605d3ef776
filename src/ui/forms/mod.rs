//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `feedback_form`: The feedback form view

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw as draw_feedback_form;

#[cfg(test)]
pub use feedback_form::{SUBMITTING_LABEL, SUBMIT_LABEL};
