//! Startup wiring for the content registry and first-run seeding.

mod registry;
mod startup;

pub use registry::{load_content_registry, resolve_seed};
pub use startup::{StartupSeedingError, seed_store_on_startup};
