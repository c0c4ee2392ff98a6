//! Selection-highlight API — tap events in, stylesheet rules out.

use axum::Json;
use pagelnet_graph::{selection_stylesheet, StyleRule, TapPayload};

/// POST /api/selection - body is the tap payload, or JSON null when the
/// selection was cleared; the response is the full stylesheet to apply.
pub async fn api_selection(Json(tap): Json<Option<TapPayload>>) -> Json<Vec<StyleRule>> {
    Json(selection_stylesheet(tap.as_ref()))
}
