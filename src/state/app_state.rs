//! Application state definitions

use super::forms::FeedbackForm;
use super::toast::ToastQueue;
use std::time::{Duration, Instant};

/// Spinner frames shown on the submit button while a request is in flight
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_DURATION: Duration = Duration::from_millis(80);

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting {
        started_at: Instant,
    },
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FeedbackForm,
    pub submit_state: SubmitState,
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn new(toasts: ToastQueue) -> Self {
        Self {
            toasts,
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state.is_submitting()
    }

    /// The submit button is disabled exactly while a request is in flight
    pub fn is_submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Current spinner glyph, or None when idle
    pub fn spinner_frame(&self) -> Option<&'static str> {
        match self.submit_state {
            SubmitState::Idle => None,
            SubmitState::Submitting { started_at } => {
                let ticks = started_at.elapsed().as_millis() / SPINNER_FRAME_DURATION.as_millis();
                Some(SPINNER_FRAMES[ticks as usize % SPINNER_FRAMES.len()])
            }
        }
    }
}
