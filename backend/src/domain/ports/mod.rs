//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_command;
mod contact_notifier;
mod message_repository;
mod portfolio_query;
mod portfolio_repository;
mod portfolio_seed_repository;

#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::ContactCommand;
#[cfg(test)]
pub use contact_notifier::MockContactNotifier;
pub use contact_notifier::{ContactNotifier, NoOpContactNotifier, NotificationError};
#[cfg(test)]
pub use message_repository::MockMessageRepository;
pub use message_repository::{MessageRepository, MessageRepositoryError};
#[cfg(test)]
pub use portfolio_query::MockPortfolioQuery;
pub use portfolio_query::PortfolioQuery;
#[cfg(test)]
pub use portfolio_repository::MockPortfolioRepository;
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryError};
#[cfg(test)]
pub use portfolio_seed_repository::MockPortfolioSeedRepository;
pub use portfolio_seed_repository::{
    PortfolioSeedRepository, PortfolioSeedRepositoryError, SeedingResult,
};
