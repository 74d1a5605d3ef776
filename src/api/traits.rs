//! Trait abstraction for the feedback client to enable mocking in tests

use super::client::FeedbackResponse;
use super::error::SubmitError;
use crate::state::FeedbackSubmission;
use async_trait::async_trait;

/// Trait for feedback client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackClientTrait: Send + Sync {
    /// Post one submission and read the confirmation message
    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackResponse, SubmitError>;
}
