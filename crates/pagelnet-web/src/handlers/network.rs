//! Network filtering API — the validation boundary in front of the core.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use pagelnet_common::error::ApiError;
use pagelnet_graph::{filter_graph, render_elements, FilterSummary, RenderElement, ThresholdQuery};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::SharedState;

/// Raw query parameters as they arrive from the controls. Parsing into
/// `ThresholdQuery` rejects out-of-range values with a 422 before the filter
/// ever runs; the layout name never reaches the server.
#[derive(Debug, Deserialize)]
pub struct NetworkParams {
    pub focal: String,
    pub depth: u32,
    pub lr_min: f64,
    pub p_max: f64,
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub elements: Vec<RenderElement>,
    pub summary: FilterSummary,
}

/// GET /api/network - filtered subgraph as render elements plus summary
pub async fn api_network(
    State(state): State<SharedState>,
    Query(params): Query<NetworkParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ThresholdQuery::new(params.focal, params.depth, params.lr_min, params.p_max)?;
    debug!(?query, "network query");

    let filtered = filter_graph(&state.graph, &query);
    let summary = FilterSummary::new(&query, &filtered);
    let elements = render_elements(&filtered, query.focal());

    Ok(Json(NetworkResponse { elements, summary }))
}

/// GET /api/nodes - identifiers for the focal-node selector
pub async fn api_nodes(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.known_nodes().to_vec())
}
