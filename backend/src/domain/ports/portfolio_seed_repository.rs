//! Port abstraction for first-run seeding of a persistent portfolio store.
//!
//! Adapters must insert the whole dataset in a single transaction and only
//! when the store holds no projects yet.

use async_trait::async_trait;
use portfolio_content::SeedDataset;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by seed repository adapters.
    pub enum PortfolioSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "portfolio seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "portfolio seeding query failed: {message}",
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The dataset was inserted.
    Applied,
    /// The store already held content; nothing was written.
    AlreadySeeded,
}

/// Applies a seed dataset to an empty store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioSeedRepository: Send + Sync {
    /// Insert `dataset` when the projects collection is empty.
    async fn seed_if_empty(
        &self,
        dataset: &SeedDataset,
    ) -> Result<SeedingResult, PortfolioSeedRepositoryError>;
}
