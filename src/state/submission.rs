//! Feedback payload types

use serde::{Deserialize, Serialize};

/// Highest value the rating slider can take
pub const MAX_RATING: u8 = 5;

/// Subject options offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Feedback,
    #[serde(rename = "Bug Report")]
    BugReport,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    Other,
}

impl Subject {
    /// All options in the order they appear in the select
    pub const ALL: [Subject; 4] = [
        Subject::Feedback,
        Subject::BugReport,
        Subject::FeatureRequest,
        Subject::Other,
    ];

    /// Label shown in the select
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feedback => "General Feedback",
            Self::BugReport => "Bug Report",
            Self::FeatureRequest => "Feature Request",
            Self::Other => "Other",
        }
    }

    /// Value sent over the wire
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::BugReport => "Bug Report",
            Self::FeatureRequest => "Feature Request",
            Self::Other => "Other",
        }
    }

    /// Parse a wire value back into a subject
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.wire_value() == value)
    }

    /// Cycle forward through the select, including the empty placeholder
    pub fn next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Feedback),
            Some(Self::Feedback) => Some(Self::BugReport),
            Some(Self::BugReport) => Some(Self::FeatureRequest),
            Some(Self::FeatureRequest) => Some(Self::Other),
            Some(Self::Other) => None,
        }
    }

    /// Cycle backward through the select, including the empty placeholder
    pub fn prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Other),
            Some(Self::Feedback) => None,
            Some(Self::BugReport) => Some(Self::Feedback),
            Some(Self::FeatureRequest) => Some(Self::BugReport),
            Some(Self::Other) => Some(Self::FeatureRequest),
        }
    }
}

/// The JSON document posted to the feedback endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub subject: Subject,
    pub message: String,
    pub rating: u8,
}
