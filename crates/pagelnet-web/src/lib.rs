//! pagelnet-web — Browser dashboard for the association network.
//! Provides:
//!   - The network explorer (threshold + neighborhood filtering)
//!   - Pagel heatmap panel over the precomputed tables
//!   - Tap-to-highlight styling of the drawn network

pub mod handlers;
pub mod router;
pub mod state;
