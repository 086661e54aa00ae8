//! Service entry-point: serves the question API over HTTP and gRPC.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use questionary::inbound::http::health::HealthState;
use questionary::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use questionary::settings::QuestionarySettings;
use server::{ServerConfig, create_servers};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = QuestionarySettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let config = build_server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let servers = create_servers(health_state.clone(), config).await?;
    health_state.mark_ready();
    info!("questionary ready");

    let result = servers.run().await;
    health_state.mark_unhealthy();
    result
}

async fn build_server_config(settings: &QuestionarySettings) -> io::Result<ServerConfig> {
    let http_addr = settings.http_addr().map_err(io::Error::other)?;
    let grpc_addr = settings.grpc_addr().map_err(io::Error::other)?;
    let config = ServerConfig::new(http_addr, grpc_addr);

    let Some(database_url) = settings.database_url() else {
        return Ok(config.with_example_data(settings.seed_example_data));
    };

    run_migrations(database_url)
        .await
        .map_err(io::Error::other)?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_connection_timeout(settings.connect_timeout()),
    )
    .await
    .map_err(io::Error::other)?;
    Ok(config.with_db_pool(pool))
}
