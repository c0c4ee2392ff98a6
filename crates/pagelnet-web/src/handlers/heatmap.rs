//! Heatmap API — serves the precomputed Pagel tables to the plotting layer.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use pagelnet_common::error::ApiError;
use pagelnet_data::Matrix;
use serde::Deserialize;

use crate::state::SharedState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Lr,
    P,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Feature-vs-feature Pagel results
    #[default]
    Feature,
    /// Feature-vs-habitat Pagel results
    Habitat,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeatmapParams {
    #[serde(default)]
    pub metric: Metric,
    #[serde(default)]
    pub table: TableKind,
}

/// GET /api/heatmap - one of the four tables, chosen by metric and table axis
pub async fn api_heatmap(
    State(state): State<SharedState>,
    Query(params): Query<HeatmapParams>,
) -> Result<impl IntoResponse, ApiError> {
    let matrix: &Matrix = match (params.table, params.metric) {
        (TableKind::Feature, Metric::Lr) => &state.tables.feature_lr,
        (TableKind::Feature, Metric::P) => &state.tables.feature_pval,
        (TableKind::Habitat, Metric::Lr) => &state.tables.habitat_lr,
        (TableKind::Habitat, Metric::P) => &state.tables.habitat_pval,
    };
    Ok(Json(matrix.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: HeatmapParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.metric, Metric::Lr);
        assert_eq!(params.table, TableKind::Feature);

        let params: HeatmapParams =
            serde_json::from_str(r#"{"metric": "p", "table": "habitat"}"#).unwrap();
        assert_eq!(params.metric, Metric::P);
        assert_eq!(params.table, TableKind::Habitat);
    }

    #[test]
    fn test_unknown_metric_rejected() {
        assert!(serde_json::from_str::<HeatmapParams>(r#"{"metric": "zscore"}"#).is_err());
    }
}
