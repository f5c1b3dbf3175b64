//! Port abstraction for best-effort contact notifications.
//!
//! Notification runs after a message has been stored. Its outcome is only
//! logged and never changes the response of the triggering request.
use async_trait::async_trait;

use crate::domain::Message;

use super::define_port_error;

define_port_error! {
    /// Errors raised while dispatching a contact notification.
    pub enum NotificationError {
        /// The provider could not be reached or did not answer in time.
        Transport { message: String } => "notification transport failed: {message}",
        /// The provider answered with a non-success status.
        Rejected { status: u16, message: String } => "notification rejected with status {status}: {message}",
    }
}

/// Delivers a notification about a newly stored message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Notify the site owner about `message`.
    async fn notify(&self, message: &Message) -> Result<(), NotificationError>;
}

/// Notifier used when no email provider is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpContactNotifier;

#[async_trait]
impl ContactNotifier for NoOpContactNotifier {
    async fn notify(&self, message: &Message) -> Result<(), NotificationError> {
        tracing::debug!(message_id = message.id, "notification disabled; skipping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn no_op_notifier_always_succeeds() {
        let message = Message {
            id: 1,
            name: "Al".to_owned(),
            email: "al@x.com".to_owned(),
            message: "Interested in working together".to_owned(),
            created_at: Utc::now(),
        };
        assert_eq!(NoOpContactNotifier.notify(&message).await, Ok(()));
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = NotificationError::rejected(422_u16, "invalid recipient");
        assert_eq!(
            err.to_string(),
            "notification rejected with status 422: invalid recipient"
        );
    }
}
