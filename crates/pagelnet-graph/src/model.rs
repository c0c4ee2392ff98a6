//! Attributed undirected graph over string node identifiers.
//!
//! Thin wrapper around `petgraph::graph::UnGraph` plus an id → index map so
//! callers work in terms of node identifiers, never `NodeIndex`. Insertion
//! order is iteration order for both nodes and edges, which the render
//! projector relies on.

use pagelnet_common::attrs::AttrMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Node payload: its identifier plus pass-through auxiliary attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: String,
    pub attrs: AttrMap,
}

/// Edge payload. `lr` and `p` are required by construction; anything else the
/// source file carried rides along in `attrs` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStats {
    /// Likelihood ratio of the association, >= 0.
    pub lr: f64,
    /// p-value of the association, in [0, 1].
    pub p: f64,
    pub attrs: AttrMap,
}

impl EdgeStats {
    pub fn new(lr: f64, p: f64) -> Self {
        Self {
            lr,
            p,
            attrs: AttrMap::new(),
        }
    }
}

/// The association network: undirected, string-keyed, attribute-carrying.
#[derive(Debug, Clone, Default)]
pub struct AssocGraph {
    graph: UnGraph<NodeData, EdgeStats>,
    index: HashMap<String, NodeIndex>,
}

impl AssocGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node if absent, returning its index either way.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        self.add_node_with_attrs(id, AttrMap::new())
    }

    /// Register a node with attributes. An already-present node keeps its
    /// existing attributes; the supplied map is ignored in that case.
    pub fn add_node_with_attrs(&mut self, id: &str, attrs: AttrMap) -> NodeIndex {
        if let Some(&ix) = self.index.get(id) {
            return ix;
        }
        let ix = self.graph.add_node(NodeData {
            id: id.to_string(),
            attrs,
        });
        self.index.insert(id.to_string(), ix);
        ix
    }

    /// Add an undirected edge. Unknown endpoints are registered first, so the
    /// endpoint-existence invariant holds by construction.
    pub fn add_edge(&mut self, u: &str, v: &str, stats: EdgeStats) {
        let ui = self.add_node(u);
        let vi = self.add_node(v);
        self.graph.add_edge(ui, vi, stats);
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.graph.node_indices().map(|ix| &self.graph[ix])
    }

    /// Edges in insertion order, with both endpoint payloads.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeData, &NodeData, &EdgeStats)> {
        self.graph
            .edge_references()
            .map(|er| (&self.graph[er.source()], &self.graph[er.target()], er.weight()))
    }

    pub fn node_attrs(&self, id: &str) -> Option<&AttrMap> {
        self.index.get(id).map(|&ix| &self.graph[ix].attrs)
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn inner(&self) -> &UnGraph<NodeData, EdgeStats> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_endpoints() {
        let mut g = AssocGraph::new();
        g.add_edge("A", "B", EdgeStats::new(100.0, 0.01));
        assert!(g.contains_node("A"));
        assert!(g.contains_node("B"));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_node_keeps_first_attrs() {
        let mut g = AssocGraph::new();
        let mut attrs = AttrMap::new();
        attrs.insert("habitat".into(), "marine".into());
        g.add_node_with_attrs("A", attrs);
        g.add_node("A");
        assert_eq!(g.node_count(), 1);
        assert!(g.node_attrs("A").unwrap().contains_key("habitat"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut g = AssocGraph::new();
        for id in ["C", "A", "B"] {
            g.add_node(id);
        }
        let ids: Vec<&str> = g.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }
}
