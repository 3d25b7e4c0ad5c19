//! Public HTTP surface.
//!
//! Three routes: `POST /api/newThread`, `POST /api/sendMessage` and
//! `GET /health`. Every failure is rendered as
//! `{"error": <fixed message>, "success": false}` by [`ApiError`].

pub mod dto;
mod error;
mod handlers;
mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use state::AppState;

use crate::conversation::ports::{ConversationProvider, Sleeper};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use mockable::Clock;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the router with CORS and request tracing applied.
pub fn router<P, C, S>(state: AppState<P, C, S>, allowed_origins: &[String]) -> Router
where
    P: ConversationProvider + 'static,
    C: Clock + Send + Sync + 'static,
    S: Sleeper + 'static,
{
    Router::new()
        .route("/api/newThread", post(handlers::new_thread::<P, C, S>))
        .route("/api/sendMessage", post(handlers::send_message::<P, C, S>))
        .route("/health", get(handlers::health::<P, C, S>))
        .layer(build_cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.trim() == "*";
            if wildcard {
                tracing::warn!("ignoring wildcard CORS origin; credentials require explicit origins");
            }
            !wildcard
        })
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| tracing::warn!(origin = %origin, "ignoring unparseable CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Serves `app` until Ctrl-C is received.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
