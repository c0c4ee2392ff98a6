//! Projection of a graph into a flat, renderable element list.
//!
//! Output follows the cytoscape element shape: node elements first, then edge
//! elements, each group in graph iteration order. Attributes are splatted into
//! the element's `data` map unchanged.

use crate::model::AssocGraph;
use pagelnet_common::attrs::AttrMap;
use serde::Serialize;

/// Classification of a node element relative to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    Focal,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeElementData {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeElementData {
    pub source: String,
    pub target: String,
    pub lr: f64,
    pub p: f64,
    #[serde(flatten)]
    pub attrs: AttrMap,
}

/// One entry of the element list handed to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderElement {
    Node {
        data: NodeElementData,
        classes: NodeClass,
    },
    Edge {
        data: EdgeElementData,
    },
}

/// Flatten `graph` into render elements, tagging `focal` distinctly.
///
/// Pure and idempotent; no deduplication and no reordering beyond
/// nodes-before-edges. Positioning belongs to the visual layer.
pub fn render_elements(graph: &AssocGraph, focal: &str) -> Vec<RenderElement> {
    let mut elements = Vec::with_capacity(graph.node_count() + graph.edge_count());
    for node in graph.nodes() {
        let classes = if node.id == focal {
            NodeClass::Focal
        } else {
            NodeClass::Other
        };
        elements.push(RenderElement::Node {
            data: NodeElementData {
                id: node.id.clone(),
                label: node.id.clone(),
                attrs: node.attrs.clone(),
            },
            classes,
        });
    }
    for (u, v, stats) in graph.edges() {
        elements.push(RenderElement::Edge {
            data: EdgeElementData {
                source: u.id.clone(),
                target: v.id.clone(),
                lr: stats.lr,
                p: stats.p,
                attrs: stats.attrs.clone(),
            },
        });
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeStats;
    use pagelnet_common::attrs::AttrValue;

    fn small_graph() -> AssocGraph {
        let mut g = AssocGraph::new();
        let mut attrs = AttrMap::new();
        attrs.insert("habitat".into(), AttrValue::Text("gut".into()));
        g.add_node_with_attrs("A", attrs);
        g.add_edge("A", "B", EdgeStats::new(100.0, 0.01));
        g
    }

    #[test]
    fn test_nodes_precede_edges_in_graph_order() {
        let g = small_graph();
        let elems = render_elements(&g, "A");
        assert_eq!(elems.len(), 3);
        assert!(matches!(&elems[0], RenderElement::Node { data, .. } if data.id == "A"));
        assert!(matches!(&elems[1], RenderElement::Node { data, .. } if data.id == "B"));
        assert!(matches!(&elems[2], RenderElement::Edge { data } if data.source == "A" && data.target == "B"));
    }

    #[test]
    fn test_exactly_one_focal_class() {
        let g = small_graph();
        let elems = render_elements(&g, "B");
        let focal: Vec<_> = elems
            .iter()
            .filter(|e| matches!(e, RenderElement::Node { classes: NodeClass::Focal, .. }))
            .collect();
        assert_eq!(focal.len(), 1);
        assert!(matches!(focal[0], RenderElement::Node { data, .. } if data.id == "B"));
    }

    #[test]
    fn test_idempotent() {
        let g = small_graph();
        assert_eq!(render_elements(&g, "A"), render_elements(&g, "A"));
    }

    #[test]
    fn test_attrs_passed_through_in_json() {
        let g = small_graph();
        let json = serde_json::to_value(render_elements(&g, "A")).unwrap();
        assert_eq!(json[0]["data"]["habitat"], "gut");
        assert_eq!(json[0]["classes"], "focal");
        assert_eq!(json[2]["data"]["lr"], 100.0);
        assert_eq!(json[2]["data"]["p"], 0.01);
    }

    #[test]
    fn test_unknown_focal_marks_everything_other() {
        let g = small_graph();
        let elems = render_elements(&g, "ZZZ");
        assert!(elems
            .iter()
            .all(|e| !matches!(e, RenderElement::Node { classes: NodeClass::Focal, .. })));
    }
}
