//! Cache policy for API responses.
//!
//! Every `/api` response, including error responses, disables browser and
//! intermediary caching so freshly seeded content is always visible.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// `Cache-Control` value applied to API responses.
pub const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Header name understood by CDNs that ignore `Cache-Control`.
pub const SURROGATE_CONTROL: &str = "Surrogate-Control";

/// Middleware inserting the no-store header set on every response.
///
/// Handlers that set one of these headers explicitly keep their own value.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::cache_control::no_store_headers;
///
/// let _app = App::new().service(web::scope("/api").wrap(no_store_headers()));
/// ```
pub fn no_store_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CACHE_CONTROL, NO_STORE))
        .add((header::PRAGMA, "no-cache"))
        .add((header::EXPIRES, "0"))
        .add((SURROGATE_CONTROL, "no-store"))
}
