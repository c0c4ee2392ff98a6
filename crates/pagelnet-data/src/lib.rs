//! pagelnet-data — Startup loading of the association network and the
//! precomputed heatmap tables. All loading happens once per process; any
//! failure here is a fatal startup error.

pub mod graphml;
pub mod matrix;

pub use graphml::read_graphml;
pub use matrix::{read_matrix, Matrix};
