//! Tagged attribute values for node/edge annotation maps.
//!
//! GraphML data values arrive typed (double, boolean, string); rather than an
//! open-ended `serde_json::Value` the graph model uses a closed scalar enum so
//! the render projector's contract stays explicit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single node or edge attribute value.
///
/// Serialized untagged so JSON output carries the natural representation
/// (`42.0`, `true`, `"marine"`). Variant order matters for deserialization:
/// bools and numbers must be tried before the catch-all string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Ordered attribute map; BTreeMap keeps serialized output deterministic.
pub type AttrMap = BTreeMap<String, AttrValue>;

impl AttrValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Number(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(
            serde_json::to_string(&AttrValue::Number(3.5)).unwrap(),
            "3.5"
        );
        assert_eq!(
            serde_json::to_string(&AttrValue::Text("marine".into())).unwrap(),
            "\"marine\""
        );
        assert_eq!(serde_json::to_string(&AttrValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_untagged_roundtrip_prefers_scalars() {
        let v: AttrValue = serde_json::from_str("2.25").unwrap();
        assert_eq!(v, AttrValue::Number(2.25));
        let v: AttrValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, AttrValue::Bool(false));
    }
}
