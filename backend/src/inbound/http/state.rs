//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, PortfolioQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Portfolio reads.
    pub portfolio: Arc<dyn PortfolioQuery>,
    /// Contact form submissions.
    pub contact: Arc<dyn ContactCommand>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    pub fn new(portfolio: Arc<dyn PortfolioQuery>, contact: Arc<dyn ContactCommand>) -> Self {
        Self { portfolio, contact }
    }
}
