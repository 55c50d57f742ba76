//! Courier entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use courier::inbound::http::health::HealthState;
use courier::inbound::http::session_config::{BuildMode, session_settings_from_env};
use courier::outbound::persistence::{DbPool, PoolConfig, run_migrations, seed_demo_data};
use courier::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        SameSite::Lax,
        settings.bind_addr(),
    )
    .with_demo_password(settings.demo_password());

    match settings.database_url() {
        Some(database_url) => {
            let pool = prepare_database(database_url, &settings).await?;
            config = config.with_db_pool(pool);
        }
        None => info!("no database configured; serving in-memory demo data"),
    }

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = config.bind_addr();
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "courier listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated with an error")
}

async fn prepare_database(database_url: &str, settings: &AppSettings) -> color_eyre::Result<DbPool> {
    run_migrations(database_url)
        .await
        .wrap_err("database migration failed")?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .wrap_err("failed to build database pool")?;
    if settings.seed_demo_data() {
        seed_demo_data(&pool)
            .await
            .wrap_err("failed to seed demo data")?;
    }
    Ok(pool)
}
