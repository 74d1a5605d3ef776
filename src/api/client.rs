//! HTTP client for the feedback endpoint
//!
//! Posts a [`FeedbackSubmission`] as JSON and reads back the confirmation
//! message. One request per call: no retries, no backoff.

use super::error::SubmitError;
use super::traits::FeedbackClientTrait;
use crate::state::FeedbackSubmission;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default feedback endpoint
pub const DEFAULT_ENDPOINT: &str = "https://formbackend-f471.onrender.com/api/v1/user/feedback";

/// Body returned by the endpoint on success
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
}

/// Client for posting feedback
pub struct FeedbackClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FeedbackClient {
    /// Create a new client. Without a timeout the request waits as long as
    /// the transport allows.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackClientTrait for FeedbackClient {
    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackResponse, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting feedback");

        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status });
        }

        let body = response.bytes().await.map_err(SubmitError::Network)?;
        let parsed: FeedbackResponse = serde_json::from_slice(&body)?;

        tracing::debug!(%status, "feedback accepted");
        Ok(parsed)
    }
}
