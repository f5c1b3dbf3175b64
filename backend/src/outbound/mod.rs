//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: in-process store used when no database is configured
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **email**: transactional email notifier backed by the Resend HTTP API
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod email;
pub mod memory;
pub mod persistence;
