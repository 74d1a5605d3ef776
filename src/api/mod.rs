//! Feedback endpoint client

mod client;
mod error;
mod traits;

pub use client::{FeedbackClient, FeedbackResponse, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::FeedbackClientTrait;

#[cfg(test)]
pub use traits::MockFeedbackClientTrait;
