//! Shared application state: everything loaded once at startup and read-only
//! for the rest of the process lifetime. Handlers receive it behind an `Arc`
//! and never mutate it; derived subgraphs are per-request values.

use pagelnet_common::error::Result;
use pagelnet_config::{AppConfig, QueryDefaults};
use pagelnet_data::{read_graphml, read_matrix, Matrix};
use pagelnet_graph::AssocGraph;
use std::sync::Arc;
use tracing::info;

/// The four precomputed Pagel tables backing the heatmap panel.
pub struct HeatmapTables {
    pub feature_lr: Matrix,
    pub feature_pval: Matrix,
    pub habitat_lr: Matrix,
    pub habitat_pval: Matrix,
}

/// Immutable-after-load state injected into every handler.
pub struct AppState {
    pub graph: AssocGraph,
    pub tables: HeatmapTables,
    pub defaults: QueryDefaults,
}

impl AppState {
    /// Load the network and tables named in the configuration. Any failure is
    /// a fatal startup error.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let graph = read_graphml(&config.data.network)?;
        let tables = HeatmapTables {
            feature_lr: read_matrix(&config.data.feature_lr)?,
            feature_pval: read_matrix(&config.data.feature_pval)?,
            habitat_lr: read_matrix(&config.data.habitat_lr)?,
            habitat_pval: read_matrix(&config.data.habitat_pval)?,
        };

        let mut defaults = config.defaults.clone();
        if defaults.focal.is_none() {
            // Match the original dashboard: preselect from the table columns.
            defaults.focal = tables.feature_lr.columns.first().cloned();
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            focal = defaults.focal.as_deref().unwrap_or("-"),
            "application state ready"
        );
        Ok(Self {
            graph,
            tables,
            defaults,
        })
    }

    /// Identifiers offered by the focal-node selector.
    pub fn known_nodes(&self) -> &[String] {
        &self.tables.feature_lr.columns
    }
}

pub type SharedState = Arc<AppState>;
