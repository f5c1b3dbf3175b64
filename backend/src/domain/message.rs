//! Contact messages submitted through the public form.
//!
//! A [`NewMessage`] can only be obtained by validating a raw submission (see
//! [`crate::domain::ContactSubmission`]). Stores turn it into a [`Message`]
//! by assigning the identifier and creation timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A validated contact submission awaiting storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    name: String,
    email: String,
    message: String,
}

impl NewMessage {
    pub(crate) fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    /// Sender name, exactly as submitted.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Sender email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Message body.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Attach store-assigned metadata, producing the stored record.
    pub fn into_message(self, id: i32, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}

/// A stored contact message.
///
/// `created_at` is always set by the store at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Store-assigned identifier.
    pub id: i32,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Insertion timestamp (UTC).
    pub created_at: DateTime<Utc>,
}
