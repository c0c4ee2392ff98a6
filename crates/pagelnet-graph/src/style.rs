//! Selection-highlight stylesheet rules for the drawing surface.
//!
//! Rules are plain `{selector, style}` pairs in cytoscape stylesheet form.
//! Tapping a node restyles it, its one-hop neighbors, and its incident edges
//! on top of the default sheet; no graph recomputation happens here.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Edge widths scale linearly with `lr` over this data range.
pub const LR_WIDTH_DOMAIN: (f64, f64) = (50.0, 200.0);
pub const LR_WIDTH_RANGE: (f64, f64) = (0.75, 5.0);

const NODE_COLOR: &str = "#607d8b";
const FOCAL_COLOR: &str = "#d81b60";
const EDGE_COLOR: &str = "#b0bec5";
const SELECTED_COLOR: &str = "#b10dc9";
const NEIGHBOR_COLOR: &str = "#0074d9";
const SELECTED_EDGE_COLOR: &str = "#ff4136";

/// One stylesheet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: serde_json::Value,
}

/// An incident edge as reported by the surface's tap event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Tap event payload: the selected node and its incident edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapPayload {
    pub id: String,
    #[serde(default)]
    pub edges: Vec<TapEdge>,
}

/// The stylesheet applied when nothing is selected: node color + label,
/// focal-class accent, and the global lr → edge-width mapping.
pub fn default_stylesheet() -> Vec<StyleRule> {
    let (d0, d1) = LR_WIDTH_DOMAIN;
    let (w0, w1) = LR_WIDTH_RANGE;
    vec![
        StyleRule {
            selector: "node".to_string(),
            style: json!({
                "background-color": NODE_COLOR,
                "label": "data(label)",
                "font-size": "10px",
            }),
        },
        StyleRule {
            selector: ".focal".to_string(),
            style: json!({ "background-color": FOCAL_COLOR }),
        },
        StyleRule {
            selector: "edge".to_string(),
            style: json!({
                "line-color": EDGE_COLOR,
                "width": format!("mapData(lr, {d0}, {d1}, {w0}, {w1})"),
            }),
        },
    ]
}

/// Default sheet plus highlight rules for the tapped node, each one-hop
/// neighbor, and each incident edge. `None` yields the default sheet exactly.
pub fn selection_stylesheet(tap: Option<&TapPayload>) -> Vec<StyleRule> {
    let mut rules = default_stylesheet();
    let Some(tap) = tap else {
        return rules;
    };

    rules.push(StyleRule {
        selector: format!("node[id = \"{}\"]", tap.id),
        style: json!({
            "background-color": SELECTED_COLOR,
            "border-color": SELECTED_COLOR,
            "border-width": 2,
        }),
    });
    for edge in &tap.edges {
        let neighbor = if edge.source == tap.id {
            &edge.target
        } else {
            &edge.source
        };
        rules.push(StyleRule {
            selector: format!("node[id = \"{neighbor}\"]"),
            style: json!({ "background-color": NEIGHBOR_COLOR }),
        });
        rules.push(StyleRule {
            selector: format!("edge[id = \"{}\"]", edge.id),
            style: json!({
                "line-color": SELECTED_EDGE_COLOR,
                "line-style": "solid",
            }),
        });
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_is_default_sheet() {
        assert_eq!(selection_stylesheet(None), default_stylesheet());
    }

    #[test]
    fn test_default_edge_width_mapping() {
        let sheet = default_stylesheet();
        let edge_rule = sheet.iter().find(|r| r.selector == "edge").unwrap();
        assert_eq!(
            edge_rule.style["width"],
            "mapData(lr, 50, 200, 0.75, 5)"
        );
    }

    #[test]
    fn test_tap_highlights_node_neighbor_and_edge() {
        let tap = TapPayload {
            id: "B".to_string(),
            edges: vec![TapEdge {
                id: "e0".to_string(),
                source: "A".to_string(),
                target: "B".to_string(),
            }],
        };
        let sheet = selection_stylesheet(Some(&tap));
        let selectors: Vec<&str> = sheet.iter().map(|r| r.selector.as_str()).collect();
        assert!(selectors.contains(&"node[id = \"B\"]"));
        assert!(selectors.contains(&"node[id = \"A\"]"));
        assert!(selectors.contains(&"edge[id = \"e0\"]"));
        // Default rules stay in front.
        assert_eq!(&sheet[..default_stylesheet().len()], &default_stylesheet()[..]);
    }

    #[test]
    fn test_neighbor_is_the_other_endpoint() {
        // Tapped node listed as the edge source this time.
        let tap = TapPayload {
            id: "B".to_string(),
            edges: vec![TapEdge {
                id: "e1".to_string(),
                source: "B".to_string(),
                target: "C".to_string(),
            }],
        };
        let sheet = selection_stylesheet(Some(&tap));
        assert!(sheet.iter().any(|r| r.selector == "node[id = \"C\"]"));
        assert!(!sheet.iter().any(|r| r.selector == "node[id = \"B\"]"
            && r.style["background-color"] == NEIGHBOR_COLOR));
    }
}
