//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! records. Row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal details never exposed to the domain layer. Connections come from
//! a `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselPortfolioRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/portfolio")).await?;
//! let repository = DieselPortfolioRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_message_repository;
mod diesel_portfolio_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_message_repository::DieselMessageRepository;
pub use diesel_portfolio_repository::DieselPortfolioRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
