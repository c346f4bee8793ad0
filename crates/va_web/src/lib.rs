use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod forwarder;
pub mod handlers;
pub mod state;

pub use error::ProxyError;
pub use forwarder::{Forwarder, UpstreamReply};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", any(handlers::process_video))
        .route("/api/process-video", any(handlers::process_video))
        .layer(layers)
        .with_state(Arc::new(state))
}

/// Serve the proxy until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🛰️ Proxy listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down proxy");
        })
        .await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{AppState, ProxyError};
    pub use va_core::{ProxyConfig, Result, Error};
}
