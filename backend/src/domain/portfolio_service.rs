//! Portfolio read service implementing the [`PortfolioQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{PortfolioQuery, PortfolioRepository, PortfolioRepositoryError};
use crate::domain::{Achievement, Error, Experience, Project};

/// Reads the portfolio collections from a repository.
pub struct PortfolioService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> PortfolioService<R> {
    /// Create a new service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for PortfolioService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn map_repository_error(error: PortfolioRepositoryError) -> Error {
    match error {
        PortfolioRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("portfolio repository unavailable: {message}"))
        }
        PortfolioRepositoryError::Query { message } => {
            Error::internal(format!("portfolio repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> PortfolioQuery for PortfolioService<R>
where
    R: PortfolioRepository + ?Sized,
{
    async fn projects(&self) -> Result<Vec<Project>, Error> {
        self.repository
            .list_projects()
            .await
            .map_err(map_repository_error)
    }

    async fn experiences(&self) -> Result<Vec<Experience>, Error> {
        self.repository
            .list_experiences()
            .await
            .map_err(map_repository_error)
    }

    async fn achievements(&self) -> Result<Vec<Achievement>, Error> {
        self.repository
            .list_achievements()
            .await
            .map_err(map_repository_error)
    }
}
