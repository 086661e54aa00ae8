//! tonic server bootstrap.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tokio::net::TcpListener;
use tonic::transport::Server;
use tonic::transport::server::TcpIncoming;
use tracing::{info, warn};

use questionary::domain::ports::QuestionaryService;
use questionary::inbound::grpc::{GrpcQuestionaryService, QuestionaryServiceServer};

/// Resolve once the process receives SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("gRPC server shutting down");
}

/// Bind `addr` and return the future serving gRPC on it.
///
/// # Errors
/// Returns [`std::io::Error`] when the socket cannot be bound.
pub(super) async fn create_grpc_server(
    service: Arc<dyn QuestionaryService>,
    addr: SocketAddr,
) -> std::io::Result<BoxFuture<'static, std::io::Result<()>>> {
    let listener = TcpListener::bind(addr).await?;
    let incoming =
        TcpIncoming::from_listener(listener, true, None).map_err(std::io::Error::other)?;

    let server = Server::builder()
        .add_service(QuestionaryServiceServer::new(GrpcQuestionaryService::new(
            service,
        )))
        .serve_with_incoming_shutdown(incoming, shutdown_signal())
        .map(|result| result.map_err(std::io::Error::other));
    Ok(server.boxed())
}
