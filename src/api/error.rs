//! Errors from talking to the feedback endpoint

use reqwest::StatusCode;
use thiserror::Error;

/// Why a submission did not succeed.
///
/// The form reports every variant to the user the same way; the distinction
/// only reaches the log.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Status { status: StatusCode },

    /// The response body was not the expected JSON
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
