//! Backend entry-point: loads settings and content, prepares the store, and
//! serves the portfolio API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{
    DbPool, DieselPortfolioRepository, PoolConfig, run_pending_migrations,
};
use backend::seeding::{load_content_registry, resolve_seed, seed_store_on_startup};
use backend::settings::ServerSettings;
use server::{ServerConfig, StoreBackend, build_notifier, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let registry = load_content_registry(settings.content_registry_path())?;
    let dataset = resolve_seed(&registry, settings.seed_name())?;

    let store = match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(database_url).await?;
            let pool = DbPool::new(
                PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
            )
            .await
            .wrap_err("failed to create database pool")?;
            let seeder = DieselPortfolioRepository::new(pool.clone());
            seed_store_on_startup(&seeder, dataset, settings.seed_on_startup()).await?;
            StoreBackend::postgres(pool)
        }
        None => StoreBackend::memory(dataset),
    };

    let notifier = build_notifier(&settings)?;
    let config = ServerConfig::new(settings.bind_addr()?, store).with_notifier(notifier);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}
