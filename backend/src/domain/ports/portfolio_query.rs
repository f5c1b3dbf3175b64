//! Driving port for the public portfolio reads.
//!
//! Inbound adapters use this port to fetch the three collections without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Achievement, Error, Experience, Project};

/// Domain use-case port for listing portfolio content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// All projects in insertion order.
    async fn projects(&self) -> Result<Vec<Project>, Error>;

    /// All experiences in insertion order.
    async fn experiences(&self) -> Result<Vec<Experience>, Error>;

    /// All achievements in insertion order.
    async fn achievements(&self) -> Result<Vec<Achievement>, Error>;
}
