//! Form field value objects

use crate::state::{Subject, MAX_RATING};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Subject(Option<Subject>),
    Rating(u8),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Shown in place of an empty value
    pub placeholder: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new subject select with nothing chosen
    pub fn subject(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Subject(None),
            is_multiline: false,
        }
    }

    /// Create a new rating slider at zero
    pub fn rating(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Rating(0),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the chosen subject (None for the placeholder or non-select fields)
    pub fn as_subject(&self) -> Option<Subject> {
        match &self.value {
            FieldValue::Subject(s) => *s,
            _ => None,
        }
    }

    /// Get the rating value (returns 0 for non-rating fields)
    pub fn as_rating(&self) -> u8 {
        match &self.value {
            FieldValue::Rating(r) => *r,
            _ => 0,
        }
    }

    /// Assign a new value, coercing it to this field's kind.
    ///
    /// Text assigned to a slider is parsed as a number and text assigned to a
    /// select is matched against the wire values. Values that cannot be
    /// coerced leave the field unchanged.
    pub fn assign(&mut self, value: FieldValue) {
        match (&mut self.value, value) {
            (FieldValue::Text(current), FieldValue::Text(new)) => *current = new,
            (FieldValue::Subject(current), FieldValue::Subject(new)) => *current = new,
            (FieldValue::Subject(current), FieldValue::Text(new)) => {
                if new.is_empty() {
                    *current = None;
                } else if let Some(subject) = Subject::from_wire(&new) {
                    *current = Some(subject);
                }
            }
            (FieldValue::Rating(current), FieldValue::Rating(new)) => {
                *current = new.min(MAX_RATING);
            }
            (FieldValue::Rating(current), FieldValue::Text(new)) => {
                if let Ok(parsed) = new.trim().parse::<u8>() {
                    *current = parsed.min(MAX_RATING);
                }
            }
            _ => {}
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Rating(r) => {
                if let Some(d) = c.to_digit(10) {
                    *r = (d as u8).min(MAX_RATING);
                }
            }
            FieldValue::Subject(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Subject(s) => *s = None,
            FieldValue::Rating(_) => {}
        }
    }

    /// Step the value forward (next subject, higher rating)
    pub fn increment(&mut self) {
        match &mut self.value {
            FieldValue::Subject(s) => *s = Subject::next(*s),
            FieldValue::Rating(r) => *r = (*r + 1).min(MAX_RATING),
            FieldValue::Text(_) => {}
        }
    }

    /// Step the value backward (previous subject, lower rating)
    pub fn decrement(&mut self) {
        match &mut self.value {
            FieldValue::Subject(s) => *s = Subject::prev(*s),
            FieldValue::Rating(r) => *r = r.saturating_sub(1),
            FieldValue::Text(_) => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Subject(s) => *s = None,
            FieldValue::Rating(r) => *r = 0,
        }
    }

    /// True when the field holds its default value
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Subject(s) => s.is_none(),
            FieldValue::Rating(r) => *r == 0,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Subject(Some(s)) => s.label().to_string(),
            FieldValue::Subject(None) => String::new(),
            FieldValue::Rating(r) => format!("Rating: {r}"),
        }
    }
}
