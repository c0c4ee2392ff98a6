pub mod heatmap;
pub mod network;
pub mod page;
pub mod selection;
