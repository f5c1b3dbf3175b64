//! Seed and fallback content for the portfolio backend.
//!
//! The crate owns a small, versioned JSON registry holding named seed
//! datasets (the records a fresh store is populated with) and the fallback
//! collections the presentation layer shows when a live collection is empty
//! or still loading. It is independent of backend domain types so the
//! registry can be validated and reused without pulling in the web stack.
//!
//! # Example
//!
//! ```
//! use portfolio_content::ContentRegistry;
//!
//! let registry = ContentRegistry::bundled().expect("bundled registry is valid");
//! let seed = registry.default_seed();
//!
//! assert_eq!(seed.name(), "showcase");
//! assert!(!seed.projects().is_empty());
//! assert!(!registry.fallback().projects().is_empty());
//! ```

mod error;
mod records;
mod registry;
mod validation;

pub use error::RegistryError;
pub use records::{AchievementSeed, ExperienceSeed, ProjectSeed};
pub use registry::{BUNDLED_REGISTRY_JSON, ContentRegistry, FallbackContent, SeedDataset};
