//! Listener construction for the HTTP and gRPC transports.

mod config;
mod grpc;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use futures_util::future::BoxFuture;
use tracing::info;

use questionary::inbound::http::health::HealthState;
use questionary::inbound::http::state::HttpState;
use questionary::inbound::http::{AppDependencies, build_app};

use state_builders::build_questionary_service;

/// Both listeners, bound and ready to be driven.
pub struct Servers {
    http: Server,
    grpc: BoxFuture<'static, std::io::Result<()>>,
}

impl Servers {
    /// Drive both listeners until either stops or fails.
    ///
    /// # Errors
    /// Returns the first listener failure.
    pub async fn run(self) -> std::io::Result<()> {
        tokio::try_join!(self.http, self.grpc)?;
        Ok(())
    }
}

/// Bind the HTTP and gRPC listeners over one shared question service.
///
/// Readiness is left to the caller, which flags it once this returns.
///
/// # Errors
/// Propagates [`std::io::Error`] when either socket cannot be bound.
pub async fn create_servers(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Servers> {
    let service = build_questionary_service(&config);
    let http_state = web::Data::new(HttpState::new(service.clone()));
    let ServerConfig {
        http_addr,
        grpc_addr,
        ..
    } = config;

    let http = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(http_addr)?
    .run();
    info!(%http_addr, "HTTP listener bound");

    let grpc = grpc::create_grpc_server(service, grpc_addr).await?;
    info!(%grpc_addr, "gRPC listener bound");

    Ok(Servers { http, grpc })
}
