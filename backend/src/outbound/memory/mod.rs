//! In-process portfolio store.

mod store;

pub use store::InMemoryPortfolioStore;
