//! Threshold-based edge selection plus bounded-depth neighborhood extraction.

use crate::model::{AssocGraph, EdgeStats};
use pagelnet_common::error::{PagelnetError, Result};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Validated, immutable filter parameters.
///
/// Construction is the validation boundary: out-of-range thresholds are
/// rejected here so `filter_graph` never sees them. Depth non-negativity is
/// enforced by the unsigned type.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdQuery {
    focal: String,
    depth: u32,
    lr_min: f64,
    p_max: f64,
}

impl ThresholdQuery {
    pub fn new(focal: impl Into<String>, depth: u32, lr_min: f64, p_max: f64) -> Result<Self> {
        if !lr_min.is_finite() || lr_min < 0.0 {
            return Err(PagelnetError::InvalidQuery(format!(
                "lr_min must be a finite value >= 0, got {lr_min}"
            )));
        }
        if !p_max.is_finite() || !(0.0..=1.0).contains(&p_max) {
            return Err(PagelnetError::InvalidQuery(format!(
                "p_max must lie in [0, 1], got {p_max}"
            )));
        }
        let focal = focal.into();
        if focal.is_empty() {
            return Err(PagelnetError::InvalidQuery(
                "focal node identifier is empty".to_string(),
            ));
        }
        Ok(Self {
            focal,
            depth,
            lr_min,
            p_max,
        })
    }

    pub fn focal(&self) -> &str {
        &self.focal
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn lr_min(&self) -> f64 {
        self.lr_min
    }

    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    fn passes(&self, stats: &EdgeStats) -> bool {
        stats.lr >= self.lr_min && stats.p <= self.p_max
    }
}

/// Filter the association network down to the focal node's neighborhood.
///
/// 1. Keep only edges with `lr >= lr_min && p <= p_max`; nodes left without a
///    surviving edge drop out.
/// 2. If the focal node did not survive (absent from the input, or isolated by
///    thresholding), degrade gracefully to the singleton graph `{focal}`.
/// 3. Otherwise keep exactly the nodes within `depth` hops of the focal node
///    and the surviving edges among them.
///
/// The result is recomputed per call and owns clones of all attribute values,
/// so callers may mutate it freely without touching the session graph.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn filter_graph(graph: &AssocGraph, query: &ThresholdQuery) -> AssocGraph {
    // Edge-induced subgraph of threshold-passing edges.
    let mut survivors = AssocGraph::new();
    for (u, v, stats) in graph.edges() {
        if query.passes(stats) {
            survivors.add_node_with_attrs(&u.id, u.attrs.clone());
            survivors.add_node_with_attrs(&v.id, v.attrs.clone());
            survivors.add_edge(&u.id, &v.id, stats.clone());
        }
    }

    let Some(focal_ix) = survivors.node_index(query.focal()) else {
        debug!(focal = query.focal(), "focal node absent or isolated, returning singleton");
        return singleton(graph, query.focal());
    };

    // Unit hop cost; lr/p play no role in distance.
    let distances = dijkstra(survivors.inner(), focal_ix, None, |_| 1u32);
    let within: HashSet<NodeIndex> = distances
        .into_iter()
        .filter(|&(_, d)| d <= query.depth())
        .map(|(ix, _)| ix)
        .collect();

    let mut result = AssocGraph::new();
    for node in survivors.nodes() {
        let Some(ix) = survivors.node_index(&node.id) else {
            continue;
        };
        if within.contains(&ix) {
            result.add_node_with_attrs(&node.id, node.attrs.clone());
        }
    }
    for (u, v, stats) in survivors.edges() {
        if result.contains_node(&u.id) && result.contains_node(&v.id) {
            result.add_edge(&u.id, &v.id, stats.clone());
        }
    }

    debug!(
        nodes = result.node_count(),
        edges = result.edge_count(),
        "neighborhood extracted"
    );
    result
}

/// The degenerate one-node graph; node attributes are carried over when the
/// focal node exists in the source graph.
fn singleton(graph: &AssocGraph, focal: &str) -> AssocGraph {
    let mut g = AssocGraph::new();
    match graph.node_attrs(focal) {
        Some(attrs) => g.add_node_with_attrs(focal, attrs.clone()),
        None => g.add_node(focal),
    };
    g
}
