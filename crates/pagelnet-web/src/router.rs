//! Axum router — maps URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    heatmap::api_heatmap,
    network::{api_network, api_nodes},
    page::dashboard,
    selection::api_selection,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/", get(dashboard))

        // API endpoints
        .route("/api/nodes", get(api_nodes))
        .route("/api/network", get(api_network))
        .route("/api/heatmap", get(api_heatmap))
        .route("/api/selection", post(api_selection))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
