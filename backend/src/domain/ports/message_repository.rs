//! Port abstraction for storing contact messages.
use async_trait::async_trait;

use crate::domain::{Message, NewMessage};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by message repository adapters.
    pub enum MessageRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "message repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "message repository query failed: {message}",
    }
}

/// Append-only message storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a validated message, assigning its id and creation timestamp.
    async fn create(&self, message: NewMessage) -> Result<Message, MessageRepositoryError>;

    /// Number of stored messages.
    async fn count(&self) -> Result<u64, MessageRepositoryError>;
}
