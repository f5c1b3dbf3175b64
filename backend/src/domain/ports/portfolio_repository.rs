//! Port abstraction for the read-only portfolio collections.
use async_trait::async_trait;

use crate::domain::{Achievement, Experience, Project};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by portfolio repository adapters.
    pub enum PortfolioRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "portfolio repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "portfolio repository query failed: {message}",
    }
}

/// Read access to the seeded portfolio collections.
///
/// Each call returns the full current collection in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// All projects.
    async fn list_projects(&self) -> Result<Vec<Project>, PortfolioRepositoryError>;

    /// All experiences.
    async fn list_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError>;

    /// All achievements.
    async fn list_achievements(&self) -> Result<Vec<Achievement>, PortfolioRepositoryError>;
}
