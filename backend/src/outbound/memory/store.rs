//! In-memory implementation of the portfolio and message repositories.
//!
//! Collections are populated once from a seed dataset and preserve
//! insertion order. Identifiers are assigned sequentially from 1. Each
//! instance owns its state, so tests can build isolated stores.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use portfolio_content::SeedDataset;
use tokio::sync::RwLock;

use crate::domain::ports::{
    MessageRepository, MessageRepositoryError, PortfolioRepository, PortfolioRepositoryError,
};
use crate::domain::{Achievement, Experience, Message, NewMessage, Project};

/// Portfolio store backed by process memory.
pub struct InMemoryPortfolioStore {
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    achievements: Vec<Achievement>,
    messages: RwLock<Vec<Message>>,
    clock: Arc<dyn Clock>,
}

fn number<S, T>(seeds: &[S], build: impl Fn(i32, &S) -> T) -> Vec<T> {
    (1..).zip(seeds).map(|(id, seed)| build(id, seed)).collect()
}

impl InMemoryPortfolioStore {
    /// Build a store holding `dataset`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::outbound::memory::InMemoryPortfolioStore;
    /// use mockable::DefaultClock;
    /// use portfolio_content::ContentRegistry;
    ///
    /// let registry = ContentRegistry::bundled().expect("bundled registry");
    /// let store = InMemoryPortfolioStore::seeded(registry.default_seed(), Arc::new(DefaultClock));
    /// # let _ = store;
    /// ```
    pub fn seeded(dataset: &SeedDataset, clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: number(dataset.projects(), Project::from_seed),
            experiences: number(dataset.experiences(), Experience::from_seed),
            achievements: number(dataset.achievements(), Achievement::from_seed),
            messages: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Build a store with no content.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: Vec::new(),
            experiences: Vec::new(),
            achievements: Vec::new(),
            messages: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Snapshot of the stored messages in insertion order.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioStore {
    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioRepositoryError> {
        Ok(self.projects.clone())
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError> {
        Ok(self.experiences.clone())
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, PortfolioRepositoryError> {
        Ok(self.achievements.clone())
    }
}

#[async_trait]
impl MessageRepository for InMemoryPortfolioStore {
    async fn create(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        let mut messages = self.messages.write().await;
        let next = messages.len() + 1;
        let id = i32::try_from(next)
            .map_err(|_| MessageRepositoryError::query("message id space exhausted"))?;
        let stored = message.into_message(id, self.clock.utc());
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, MessageRepositoryError> {
        let messages = self.messages.read().await;
        u64::try_from(messages.len())
            .map_err(|_| MessageRepositoryError::query("message count overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactSubmission;
    use chrono::{DateTime, TimeZone, Utc};
    use mockable::MockClock;
    use portfolio_content::ContentRegistry;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn store() -> InMemoryPortfolioStore {
        let registry = ContentRegistry::bundled().expect("bundled registry");
        let mut clock = MockClock::new();
        clock.expect_utc().return_const(fixed_time());
        InMemoryPortfolioStore::seeded(registry.default_seed(), Arc::new(clock))
    }

    fn new_message(name: &str) -> NewMessage {
        ContactSubmission::validate(&json!({
            "name": name,
            "email": "al@x.com",
            "message": "Interested in working together",
        }))
        .expect("valid submission")
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_collections_keep_order_and_ids(store: InMemoryPortfolioStore) {
        let projects = store.list_projects().await.expect("projects");
        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(projects[0].title, "AI Chat Assistant");

        let achievements = store.list_achievements().await.expect("achievements");
        assert_eq!(achievements.len(), 2);
        assert_eq!(achievements[1].year, "January 2024");
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_reads_are_identical(store: InMemoryPortfolioStore) {
        let first = store.list_experiences().await.expect("experiences");
        let second = store.list_experiences().await.expect("experiences");
        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_sequential_ids_and_clock_time(store: InMemoryPortfolioStore) {
        let first = store.create(new_message("Al")).await.expect("stored");
        let second = store.create(new_message("Bo")).await.expect("stored");

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.created_at, fixed_time());
        assert_eq!(store.count().await.expect("count"), 2);
        assert_eq!(store.messages().await, vec![first, second]);
    }

    #[tokio::test]
    async fn empty_store_has_no_content() {
        let store = InMemoryPortfolioStore::empty(Arc::new(MockClock::new()));
        assert!(store.list_projects().await.expect("projects").is_empty());
        assert_eq!(store.count().await.expect("count"), 0);
    }
}
