//! Driving port for contact form submissions.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, Message};

/// Domain use-case port for submitting the contact form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Validate and store a raw submission, then schedule the notification.
    ///
    /// Validation failures are returned as [`crate::domain::ErrorCode::InvalidRequest`]
    /// errors carrying the offending field path.
    async fn submit(&self, raw: &Value) -> Result<Message, Error>;
}
