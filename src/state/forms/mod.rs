//! Form domain layer
//!
//! Type-safe field values, the feedback form and its submit-time constraints.

mod field;
mod form_state;
mod validation;

pub use field::{FieldValue, FormField};
pub use form_state::{FeedbackField, FeedbackForm, Form, SUBMIT_BUTTON_INDEX};
