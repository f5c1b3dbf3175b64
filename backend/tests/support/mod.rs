//! Shared harness for HTTP integration suites.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use backend::Trace;
use backend::inbound::http::configure;
use backend::outbound::memory::InMemoryPortfolioStore;
use backend::test_support::app::memory_http_state;
use backend::test_support::notifier::RecordingNotifier;
use mockable::{Clock, DefaultClock};
use portfolio_content::ContentRegistry;

/// Store and notifier behind a test app.
pub struct Harness {
    pub store: Arc<InMemoryPortfolioStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    /// Harness over the bundled default dataset and the system clock.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(Arc::new(DefaultClock))
    }

    pub fn seeded_with_clock(clock: Arc<dyn Clock>) -> Self {
        let registry = ContentRegistry::bundled().expect("bundled registry");
        Self {
            store: Arc::new(InMemoryPortfolioStore::seeded(
                registry.default_seed(),
                clock,
            )),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    /// Initialise the app exactly as the server mounts it.
    pub async fn app(
        &self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
    {
        let state = memory_http_state(self.store.clone(), self.notifier.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(Trace)
                .configure(configure),
        )
        .await
    }
}
