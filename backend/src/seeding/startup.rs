//! First-run seeding of the persistent store.

use std::path::PathBuf;

use portfolio_content::{RegistryError, SeedDataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{PortfolioSeedRepository, PortfolioSeedRepositoryError, SeedingResult};

/// Errors returned while preparing content at startup.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing, validation or lookup failed.
    #[error("content registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Persisting the dataset failed.
    #[error("portfolio seeding error: {0}")]
    Seeding(#[from] PortfolioSeedRepositoryError),
    /// Seed name must not be blank.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Seed an empty persistent store with `dataset` when `enabled`.
///
/// Returns `None` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::outbound::persistence::{DbPool, DieselPortfolioRepository, PoolConfig};
/// use backend::seeding::{load_content_registry, seed_store_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = load_content_registry(None)?;
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/portfolio")).await?;
/// let repository = DieselPortfolioRepository::new(pool);
/// seed_store_on_startup(&repository, registry.default_seed(), true).await?;
/// # Ok(())
/// # }
/// ```
pub async fn seed_store_on_startup(
    repository: &dyn PortfolioSeedRepository,
    dataset: &SeedDataset,
    enabled: bool,
) -> Result<Option<SeedingResult>, StartupSeedingError> {
    if !enabled {
        info!(reason = "disabled", "portfolio seeding skipped");
        return Ok(None);
    }

    let result = repository.seed_if_empty(dataset).await?;
    match result {
        SeedingResult::Applied => info!(
            seed_key = dataset.name(),
            projects = dataset.projects().len(),
            experiences = dataset.experiences().len(),
            achievements = dataset.achievements().len(),
            "portfolio seed applied"
        ),
        SeedingResult::AlreadySeeded => info!(
            seed_key = dataset.name(),
            "portfolio store already holds content; skipping seed"
        ),
    }
    Ok(Some(result))
}
