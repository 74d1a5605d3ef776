//! Feedback form state

use super::field::{FieldValue, FormField};
use super::validation::{is_valid_email, require, ValidationError};
use crate::state::FeedbackSubmission;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The six inputs of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    FullName,
    Email,
    Contact,
    Subject,
    Message,
    Rating,
}

impl FeedbackField {
    /// Fields in focus order
    pub const ALL: [FeedbackField; 6] = [
        FeedbackField::FullName,
        FeedbackField::Email,
        FeedbackField::Contact,
        FeedbackField::Subject,
        FeedbackField::Message,
        FeedbackField::Rating,
    ];

    /// Position of this field in focus order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Contact => 2,
            Self::Subject => 3,
            Self::Message => 4,
            Self::Rating => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Focus index of the submit button, after the six fields
pub const SUBMIT_BUTTON_INDEX: usize = 6;

#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub full_name: FormField,
    pub email: FormField,
    pub contact: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub rating: FormField,
    pub active_field_index: usize,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name", "Full Name", false),
            email: FormField::text("email", "Email", "Email Address", false),
            contact: FormField::text("contact", "Contact", "Contact Number", false),
            subject: FormField::subject("subject", "Subject", "Select Subject"),
            message: FormField::text("message", "Message", "Write your message...", true),
            rating: FormField::rating("rating", "Rate Us (1–5)"),
            active_field_index: 0,
        }
    }

    pub fn field(&self, field: FeedbackField) -> &FormField {
        match field {
            FeedbackField::FullName => &self.full_name,
            FeedbackField::Email => &self.email,
            FeedbackField::Contact => &self.contact,
            FeedbackField::Subject => &self.subject,
            FeedbackField::Message => &self.message,
            FeedbackField::Rating => &self.rating,
        }
    }

    pub fn field_mut(&mut self, field: FeedbackField) -> &mut FormField {
        match field {
            FeedbackField::FullName => &mut self.full_name,
            FeedbackField::Email => &mut self.email,
            FeedbackField::Contact => &mut self.contact,
            FeedbackField::Subject => &mut self.subject,
            FeedbackField::Message => &mut self.message,
            FeedbackField::Rating => &mut self.rating,
        }
    }

    /// Assign a field's value. Never fails; values are coerced to the field kind.
    pub fn update_field(&mut self, field: FeedbackField, value: FieldValue) {
        self.field_mut(field).assign(value);
    }

    /// The field that currently has focus, if focus is not on the button
    pub fn active(&self) -> Option<FeedbackField> {
        FeedbackField::from_index(self.active_field_index)
    }

    pub fn focus(&mut self, field: FeedbackField) {
        self.active_field_index = field.index();
    }

    pub fn focus_submit_button(&mut self) {
        self.active_field_index = SUBMIT_BUTTON_INDEX;
    }

    /// Returns true if the submit button currently has focus
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Check the constraints, returning the first one violated in field order
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(self.full_name.as_text(), "Full Name")?;
        let email = self.email.as_text().trim();
        require(email, "Email Address")?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        require(self.contact.as_text(), "Contact Number")?;
        if self.subject.as_subject().is_none() {
            return Err(ValidationError::MissingSubject);
        }
        require(self.message.as_text(), "Message")?;
        Ok(())
    }

    /// Build the payload from the current values.
    ///
    /// Text is sent exactly as typed, except the email, which is trimmed like
    /// the value of an `<input type="email">`.
    pub fn to_submission(&self) -> Result<FeedbackSubmission, ValidationError> {
        self.validate()?;
        let subject = self
            .subject
            .as_subject()
            .ok_or(ValidationError::MissingSubject)?;
        Ok(FeedbackSubmission {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().trim().to_string(),
            contact: self.contact.as_text().to_string(),
            subject,
            message: self.message.as_text().to_string(),
            rating: self.rating.as_rating(),
        })
    }

    /// Restore every field to its default and focus the first one
    pub fn reset(&mut self) {
        for field in FeedbackField::ALL {
            self.field_mut(field).clear();
        }
        self.active_field_index = 0;
    }

    /// True when every field holds its default value
    pub fn is_pristine(&self) -> bool {
        FeedbackField::ALL
            .iter()
            .all(|f| self.field(*f).is_empty())
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        7 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let field = self.active()?;
        Some(self.field_mut(field))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FeedbackField::from_index(index).map(|f| self.field(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Subject;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.update_field(FeedbackField::FullName, FieldValue::Text("Jane Doe".into()));
        form.update_field(FeedbackField::Email, FieldValue::Text("jane@x.com".into()));
        form.update_field(FeedbackField::Contact, FieldValue::Text("5551234".into()));
        form.update_field(
            FeedbackField::Subject,
            FieldValue::Subject(Some(Subject::BugReport)),
        );
        form.update_field(FeedbackField::Message, FieldValue::Text("It crashes".into()));
        form.update_field(FeedbackField::Rating, FieldValue::Rating(4));
        form
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = FeedbackForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(form.is_pristine());
            assert_eq!(form.full_name.name, "fullName");
            assert_eq!(form.rating.as_rating(), 0);
        }

        #[test]
        fn test_field_count() {
            assert_eq!(FeedbackForm::new().field_count(), 7);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = FeedbackForm::new();
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut form = FeedbackForm::new();
            form.prev_field();
            assert!(form.is_submit_button_active());
            assert!(form.active().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = FeedbackForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = FeedbackForm::new();
            let names: Vec<_> = (0..6)
                .map(|i| form.get_field(i).unwrap().name.clone())
                .collect();
            assert_eq!(
                names,
                vec!["fullName", "email", "contact", "subject", "message", "rating"]
            );
            assert!(form.get_field(SUBMIT_BUTTON_INDEX).is_none());
        }

        #[test]
        fn test_get_active_field_mut_none_on_button() {
            let mut form = FeedbackForm::new();
            form.focus_submit_button();
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_only_message_is_multiline() {
            let mut form = FeedbackForm::new();
            form.focus(FeedbackField::Message);
            assert!(form.is_active_field_multiline());
            form.focus(FeedbackField::Email);
            assert!(!form.is_active_field_multiline());
        }

        #[test]
        fn test_field_index_round_trips() {
            for field in FeedbackField::ALL {
                assert_eq!(FeedbackField::from_index(field.index()), Some(field));
            }
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_to_submission_reads_all_fields() {
            let submission = filled_form().to_submission().unwrap();
            assert_eq!(
                submission,
                FeedbackSubmission {
                    full_name: "Jane Doe".to_string(),
                    email: "jane@x.com".to_string(),
                    contact: "5551234".to_string(),
                    subject: Subject::BugReport,
                    message: "It crashes".to_string(),
                    rating: 4,
                }
            );
        }

        #[test]
        fn test_validate_reports_first_missing_field() {
            let form = FeedbackForm::new();
            assert_eq!(
                form.validate(),
                Err(ValidationError::Required("Full Name"))
            );
        }

        #[test]
        fn test_validate_rejects_bad_email() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Email, FieldValue::Text("jane".into()));
            assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        }

        #[test]
        fn test_validate_requires_subject() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Subject, FieldValue::Subject(None));
            assert_eq!(form.to_submission(), Err(ValidationError::MissingSubject));
        }

        #[test]
        fn test_validate_requires_message() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Message, FieldValue::Text(String::new()));
            assert_eq!(form.validate(), Err(ValidationError::Required("Message")));
        }

        #[test]
        fn test_whitespace_only_text_is_accepted() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Contact, FieldValue::Text("   ".into()));
            let submission = form.to_submission().unwrap();
            assert_eq!(submission.contact, "   ");
        }

        #[test]
        fn test_whitespace_only_email_is_missing() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Email, FieldValue::Text("  ".into()));
            assert_eq!(
                form.validate(),
                Err(ValidationError::Required("Email Address"))
            );
        }

        #[test]
        fn test_email_is_sent_trimmed() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Email, FieldValue::Text(" jane@x.com ".into()));
            assert_eq!(form.to_submission().unwrap().email, "jane@x.com");
        }

        #[test]
        fn test_rating_zero_is_valid() {
            let mut form = filled_form();
            form.update_field(FeedbackField::Rating, FieldValue::Rating(0));
            assert_eq!(form.to_submission().unwrap().rating, 0);
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = filled_form();
            form.focus(FeedbackField::Rating);
            form.reset();
            assert!(form.is_pristine());
            assert_eq!(form.active_field_index, 0);
        }
    }
}
