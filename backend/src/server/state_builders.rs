//! Builders for HTTP state and the contact notifier.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use portfolio_content::SeedDataset;
use tracing::{info, warn};
use url::Url;

use backend::domain::ports::{
    ContactNotifier, MessageRepository, NoOpContactNotifier, PortfolioRepository,
};
use backend::domain::{ContactService, PortfolioService};
use backend::inbound::http::state::HttpState;
use backend::outbound::email::{RESEND_API_URL, ResendConfig, ResendNotifier};
use backend::outbound::memory::InMemoryPortfolioStore;
use backend::outbound::persistence::{DbPool, DieselMessageRepository, DieselPortfolioRepository};
use backend::settings::{NotificationDisabled, ServerSettings};

/// Store adapters backing the portfolio and message ports.
#[derive(Clone)]
pub struct StoreBackend {
    portfolio: Arc<dyn PortfolioRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl StoreBackend {
    /// In-process store holding `dataset`; contents are lost on restart.
    pub fn memory(dataset: &SeedDataset) -> Self {
        let store = Arc::new(InMemoryPortfolioStore::seeded(
            dataset,
            Arc::new(DefaultClock),
        ));
        info!(seed_key = dataset.name(), "using in-memory portfolio store");
        Self {
            portfolio: store.clone(),
            messages: store,
        }
    }

    /// PostgreSQL store over `pool`.
    pub fn postgres(pool: DbPool) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
        info!("using PostgreSQL portfolio store");
        Self {
            portfolio: Arc::new(DieselPortfolioRepository::new(pool.clone())),
            messages: Arc::new(DieselMessageRepository::new(pool, clock)),
        }
    }
}

/// Wire the domain services over `store` and `notifier`.
pub(crate) fn build_http_state(
    store: &StoreBackend,
    notifier: Arc<dyn ContactNotifier>,
) -> web::Data<HttpState> {
    let portfolio = PortfolioService::new(Arc::clone(&store.portfolio));
    let contact = ContactService::new(Arc::clone(&store.messages), notifier);
    web::Data::new(HttpState::new(Arc::new(portfolio), Arc::new(contact)))
}

/// Select the Resend notifier when fully configured, otherwise the no-op one.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be built.
pub fn build_notifier(settings: &ServerSettings) -> std::io::Result<Arc<dyn ContactNotifier>> {
    let notification = match settings.notification() {
        Ok(notification) => notification,
        Err(NotificationDisabled::MissingApiKey) => {
            warn!("no email API key configured; contact notification disabled");
            return Ok(Arc::new(NoOpContactNotifier));
        }
        Err(NotificationDisabled::MissingRecipient) => {
            warn!("email API key configured without a recipient; contact notification disabled");
            return Ok(Arc::new(NoOpContactNotifier));
        }
    };

    let endpoint = Url::parse(RESEND_API_URL)
        .map_err(|err| std::io::Error::other(format!("invalid email endpoint: {err}")))?;
    let notifier = ResendNotifier::new(ResendConfig {
        endpoint,
        api_key: notification.api_key.to_owned(),
        from: notification.from.to_owned(),
        to: notification.to.to_owned(),
        timeout: notification.timeout,
    })
    .map_err(|err| std::io::Error::other(format!("email client setup failed: {err}")))?;
    info!(to = notification.to, "contact notification enabled");
    Ok(Arc::new(notifier))
}
