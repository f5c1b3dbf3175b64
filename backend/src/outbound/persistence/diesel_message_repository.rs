//! PostgreSQL-backed message repository.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;

use crate::domain::ports::{MessageRepository, MessageRepositoryError};
use crate::domain::{Message, NewMessage};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MessageRow, NewMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::messages;

/// Diesel-backed implementation of [`MessageRepository`].
///
/// `created_at` is taken from the injected clock so every store variant
/// stamps messages the same way.
#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselMessageRepository {
    /// Create a new repository with the given pool and clock.
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool(error: PoolError) -> MessageRepositoryError {
    map_pool_error(error, MessageRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> MessageRepositoryError {
    map_diesel_error(
        error,
        MessageRepositoryError::query,
        MessageRepositoryError::connection,
    )
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        let row = NewMessageRow {
            name: message.name(),
            email: message.email(),
            message: message.message(),
            created_at: self.clock.utc(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let stored: MessageRow = diesel::insert_into(messages::table)
            .values(&row)
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;
        Ok(stored.into())
    }

    async fn count(&self) -> Result<u64, MessageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let total: i64 = messages::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;
        u64::try_from(total).map_err(|_| MessageRepositoryError::query("negative message count"))
    }
}
