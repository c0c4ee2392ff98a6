//! pagelnet-graph — Core of the association-network explorer.
//! Provides:
//!   - The attributed undirected graph model (`AssocGraph`)
//!   - Threshold + bounded-neighborhood filtering (`filter_graph`)
//!   - Projection of a graph into renderable elements (`render_elements`)
//!   - Selection-highlight stylesheet rules (`selection_stylesheet`)
//!   - The six-field filter summary shown in the properties card

pub mod elements;
pub mod filter;
pub mod model;
pub mod style;
pub mod summary;

pub use elements::{render_elements, NodeClass, RenderElement};
pub use filter::{filter_graph, ThresholdQuery};
pub use model::{AssocGraph, EdgeStats, NodeData};
pub use style::{selection_stylesheet, StyleRule, TapEdge, TapPayload};
pub use summary::FilterSummary;
