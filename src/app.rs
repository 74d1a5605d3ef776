//! Application state and core logic

use crate::api::{FeedbackClientTrait, FeedbackResponse, SubmitError};
use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIERS;
use crate::state::{
    AppState, FeedbackField, FieldValue, Form, SubmitState, ToastQueue, SUBMIT_BUTTON_INDEX,
};
use crate::ui::layout::FormLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Fixed text shown for every kind of submission failure
pub const FAILURE_MESSAGE: &str = "❌ Failed to submit feedback. Please try again.";

/// Result of one settled submission
type SubmitOutcome = Result<FeedbackResponse, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used for posting feedback
    client: Arc<dyn FeedbackClientTrait>,
    /// Sender handed to each submission task
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    /// Settled submissions waiting to be applied
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn FeedbackClientTrait>, config: &TuiConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(ToastQueue::new(config.toast_duration())),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping: apply settled submissions, expire toasts
    pub fn tick(&mut self) {
        self.poll_submission();
        self.state.toasts.prune();
    }

    /// Start a submission of the current form.
    ///
    /// Returns true when a request was issued. Nothing is sent while another
    /// submission is in flight or when the form fails validation.
    pub fn submit(&mut self) -> bool {
        if self.state.is_submitting() {
            tracing::debug!("Submit ignored: request already in flight");
            return false;
        }

        let submission = match self.state.form.to_submission() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!("Submit blocked by validation: {err}");
                self.state.toasts.error(err.to_string());
                return false;
            }
        };

        self.state.submit_state = SubmitState::Submitting {
            started_at: Instant::now(),
        };
        tracing::info!(subject = submission.subject.wire_value(), "Submitting feedback");

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.submit_feedback(&submission).await;
            // Receiver only goes away when the app shuts down
            let _ = tx.send(outcome);
        });

        true
    }

    /// Apply a settled submission if one is waiting.
    ///
    /// Returns true when an outcome was applied.
    pub fn poll_submission(&mut self) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            Err(_) => false,
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            Ok(response) => {
                tracing::info!("Feedback submitted: {}", response.message);
                self.state.toasts.success(format!("✅ {}", response.message));
                self.state.form.reset();
            }
            Err(err) => {
                tracing::error!("Error submitting feedback: {err}");
                self.state.toasts.error(FAILURE_MESSAGE);
            }
        }
        self.state.submit_state = SubmitState::Idle;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.intersects(SUBMIT_MODIFIERS) {
            self.submit();
            return;
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => self.state.toasts.dismiss_all(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.is_active_field_multiline() {
                    if let Some(field) = form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    // Enter anywhere else submits, as in a browser form
                    self.submit();
                }
            }
            KeyCode::Left => {
                if let Some(field) = form.get_active_field_mut() {
                    field.decrement();
                }
            }
            KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.increment();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Handle pasted text by appending it to the active field
    pub fn handle_paste(&mut self, text: &str) {
        let form = &mut self.state.form;
        let Some(active) = form.active() else {
            return;
        };

        let field = form.field(active);
        tracing::debug!(field = %field.name, len = text.len(), "Paste");
        let value = match &field.value {
            FieldValue::Text(existing) => {
                let pasted = if field.is_multiline {
                    text.replace("\r\n", "\n")
                } else {
                    text.replace(['\r', '\n'], " ")
                };
                FieldValue::Text(format!("{existing}{pasted}"))
            }
            // Sliders and selects take the pasted text as their raw value
            _ => FieldValue::Text(text.trim().to_string()),
        };
        form.update_field(active, value);
    }

    /// Handle a mouse event: clicks focus fields or press the submit button
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((height, width)) = self.terminal_size else {
            return;
        };

        let layout = FormLayout::new(Rect::new(0, 0, width, height));
        match layout.target_at(mouse.column, mouse.row) {
            Some(SUBMIT_BUTTON_INDEX) => {
                self.state.form.focus_submit_button();
                self.submit();
            }
            Some(index) => {
                if let Some(field) = FeedbackField::from_index(index) {
                    self.state.form.focus(field);
                }
            }
            None => {}
        }
    }
}
