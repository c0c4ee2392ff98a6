//! The six-field summary shown next to the network plot.

use crate::filter::ThresholdQuery;
use crate::model::AssocGraph;
use serde::Serialize;

/// Human-readable record of a filter result: the query echoed back plus the
/// post-filter node and edge counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub focal_node: String,
    pub depth: u32,
    pub lr_threshold: f64,
    pub p_threshold: f64,
    pub node_count: usize,
    pub edge_count: usize,
}

impl FilterSummary {
    pub fn new(query: &ThresholdQuery, filtered: &AssocGraph) -> Self {
        Self {
            focal_node: query.focal().to_string(),
            depth: query.depth(),
            lr_threshold: query.lr_min(),
            p_threshold: query.p_max(),
            node_count: filtered.node_count(),
            edge_count: filtered.edge_count(),
        }
    }
}
