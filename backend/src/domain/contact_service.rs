//! Contact form service implementing the [`ContactCommand`] driving port.
//!
//! The service validates the submission, stores it, and then spawns the
//! notification on the Tokio runtime. The spawned task is never awaited: the
//! response depends only on the store write.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::ports::{
    ContactCommand, ContactNotifier, MessageRepository, MessageRepositoryError,
};
use crate::domain::{ContactSubmission, Error, Message, TraceId};

/// Handles contact form submissions.
pub struct ContactService<M: ?Sized, N: ?Sized> {
    messages: Arc<M>,
    notifier: Arc<N>,
}

impl<M: ?Sized, N: ?Sized> ContactService<M, N> {
    /// Create a new service with the given message store and notifier.
    pub fn new(messages: Arc<M>, notifier: Arc<N>) -> Self {
        Self { messages, notifier }
    }
}

impl<M: ?Sized, N: ?Sized> Clone for ContactService<M, N> {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

fn map_repository_error(error: MessageRepositoryError) -> Error {
    match error {
        MessageRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("message repository unavailable: {message}"))
        }
        MessageRepositoryError::Query { message } => {
            Error::internal(format!("message repository error: {message}"))
        }
    }
}

impl<M, N> ContactService<M, N>
where
    M: ?Sized,
    N: ContactNotifier + ?Sized + 'static,
{
    fn spawn_notification(&self, message: Message) {
        let notifier = Arc::clone(&self.notifier);
        let task = async move {
            match notifier.notify(&message).await {
                Ok(()) => info!(message_id = message.id, "contact notification sent"),
                Err(err) => error!(
                    message_id = message.id,
                    error = %err,
                    "contact notification failed"
                ),
            }
        };
        match TraceId::current() {
            Some(trace_id) => {
                tokio::spawn(TraceId::scope(trace_id, task));
            }
            None => {
                tokio::spawn(task);
            }
        }
    }
}

#[async_trait]
impl<M, N> ContactCommand for ContactService<M, N>
where
    M: MessageRepository + ?Sized,
    N: ContactNotifier + ?Sized + 'static,
{
    async fn submit(&self, raw: &Value) -> Result<Message, Error> {
        let new_message = ContactSubmission::validate(raw)?;
        let stored = self
            .messages
            .create(new_message)
            .await
            .map_err(map_repository_error)?;
        info!(message_id = stored.id, "contact message stored");
        self.spawn_notification(stored.clone());
        Ok(stored)
    }
}
