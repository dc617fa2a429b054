//! HTTP API over the marketplace service.
//!
//! Routes mirror the CLI: search, trending, fetch by id, publish and review
//! submission. Missing listings map to `404`, validation failures to `422`.

mod handlers;
mod response;

use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::Marketplace;

pub use handlers::{LimitParams, SearchParams};

/// Shared state handed to every handler.
pub type AppState = Arc<Marketplace>;

/// Builds the marketplace router.
pub fn build_app(marketplace: Marketplace) -> Router {
    let api = Router::new()
        .route(
            "/agents",
            get(handlers::list_agents).post(handlers::publish_agent),
        )
        .route("/agents/trending", get(handlers::trending_agents))
        .route("/agents/{agent_id}", get(handlers::get_agent))
        .route("/agents/{agent_id}/reviews", post(handlers::submit_review))
        .with_state(Arc::new(marketplace));

    Router::new().nest("/api", api)
}

/// Serves the marketplace API on `addr` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error when the listener cannot be bound or the server fails.
pub async fn serve(marketplace: Marketplace, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "marketplace API listening");
    axum::serve(listener, build_app(marketplace))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("marketplace API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
