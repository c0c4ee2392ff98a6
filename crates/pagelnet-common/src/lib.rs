//! pagelnet-common — Shared types and errors used across all Pagelnet crates.

pub mod attrs;
pub mod error;

// Re-export commonly used types
pub use attrs::{AttrMap, AttrValue};
pub use error::{ApiError, PagelnetError, Result};
