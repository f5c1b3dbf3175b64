//! Domain primitives, ports and services.
//!
//! Purpose: define the portfolio records, the contact form contract, and the
//! services behind the HTTP adapter. Types here never depend on actix-web or
//! Diesel; adapters translate at the edges.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - Project / Experience / Achievement: seeded read-only records.
//! - NewMessage / Message: contact submissions before and after storage.
//! - ContactSubmission / FieldError: first-failure validation of raw input.
//! - PortfolioPresenter: fallback substitution for page sections.
//! - PortfolioService / ContactService: driving port implementations.

pub mod contact;
pub mod error;
pub mod message;
pub mod portfolio;
pub mod ports;
pub mod presentation;
pub mod trace_id;

mod contact_service;
mod portfolio_service;

pub use self::contact::{ContactSubmission, FieldError};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode};
pub use self::message::{Message, NewMessage};
pub use self::portfolio::{Achievement, Experience, Project};
pub use self::portfolio_service::PortfolioService;
pub use self::presentation::{AchievementsSection, CollectionLoad, PortfolioPresenter};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::internal("store offline"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
