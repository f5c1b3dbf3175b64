//! HTTP inbound adapter exposing the portfolio REST endpoints.

pub mod cache_control;
pub mod content;
pub mod error;
pub mod health;
pub mod messages;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Mount the `/api` scope: the three portfolio reads and the contact form,
/// with no-store headers and the contact JSON limits applied.
///
/// Handlers expect [`state::HttpState`] to be registered as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(cache_control::no_store_headers())
            .app_data(messages::json_config())
            .service(content::list_projects)
            .service(content::list_experiences)
            .service(content::list_achievements)
            .service(messages::create_message),
    );
}
