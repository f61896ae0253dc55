//! REST API for the mix and subsidy calculators.
//!
//! Provides three endpoints:
//! - `GET /`: liveness message
//! - `POST /recomendaciones`: technology mix and savings projections
//! - `POST /subvenciones`: subsidy tier eligibility and score

mod handlers;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::mix::MixCalculator;
use crate::subsidy::SubsidyEstimator;

/// Immutable application state shared across all request handlers.
///
/// Both calculators are pure, so the state is built once at startup
/// and wrapped in `Arc` with no locks.
#[derive(Debug, Default)]
pub struct AppState {
    pub calculator: MixCalculator,
    pub estimator: SubsidyEstimator,
}

impl AppState {
    pub fn new(calculator: MixCalculator) -> Self {
        Self {
            calculator,
            estimator: SubsidyEstimator::new(),
        }
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/recomendaciones", post(handlers::post_recommendations))
        .route("/subvenciones", post(handlers::post_subsidies))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
