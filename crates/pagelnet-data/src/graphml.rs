//! GraphML reader for the association network.
//!
//! Handles the `<key>` / `<node>` / `<edge>` / `<data>` structure produced by
//! networkx's graphml writer. Every edge must carry numeric `lr` and `p`
//! values; an edge without them is rejected outright, never coerced.

use pagelnet_common::attrs::{AttrMap, AttrValue};
use pagelnet_common::error::{PagelnetError, Result};
use pagelnet_graph::{AssocGraph, EdgeStats};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument};

/// A `<key>` declaration: attribute name plus its declared value type.
#[derive(Debug, Clone)]
struct KeyDef {
    name: String,
    ty: ValueType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ValueType {
    Double,
    Boolean,
    Text,
}

impl ValueType {
    fn from_decl(decl: &str) -> Self {
        match decl {
            "double" | "float" | "int" | "long" => ValueType::Double,
            "boolean" => ValueType::Boolean,
            _ => ValueType::Text,
        }
    }
}

/// Element currently collecting `<data>` values.
enum Pending {
    Node {
        id: String,
        attrs: AttrMap,
    },
    Edge {
        source: String,
        target: String,
        values: AttrMap,
    },
}

/// Load the network from a GraphML file.
#[instrument]
pub fn read_graphml(path: &Path) -> Result<AssocGraph> {
    let xml = std::fs::read_to_string(path)?;
    let graph = parse_graphml(&xml)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "association network loaded"
    );
    Ok(graph)
}

/// Parse GraphML text into an `AssocGraph`.
pub fn parse_graphml(xml: &str) -> Result<AssocGraph> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut graph = AssocGraph::new();
    let mut keys: HashMap<String, KeyDef> = HashMap::new();

    // State machine over the element stream
    let mut pending: Option<Pending> = None;
    let mut current_key: Option<KeyDef> = None;
    let mut current_text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"key" => declare_key(e, &mut keys)?,
                b"node" => {
                    pending = Some(Pending::Node {
                        id: require_attr(e, "id")?,
                        attrs: AttrMap::new(),
                    });
                }
                b"edge" => {
                    pending = Some(Pending::Edge {
                        source: require_attr(e, "source")?,
                        target: require_attr(e, "target")?,
                        values: AttrMap::new(),
                    });
                }
                b"data" => {
                    let key_id = require_attr(e, "key")?;
                    current_key = keys.get(&key_id).cloned();
                    current_text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"key" => declare_key(e, &mut keys)?,
                b"node" => {
                    let id = require_attr(e, "id")?;
                    graph.add_node(&id);
                }
                b"edge" => {
                    // An edge with no <data> children cannot carry lr/p.
                    return Err(PagelnetError::MalformedEdge {
                        source_id: require_attr(e, "source")?,
                        target_id: require_attr(e, "target")?,
                        attr: "lr",
                    });
                }
                _ => {}
            },
            Ok(Event::Text(ref t)) => {
                if current_key.is_some() {
                    let text = t
                        .unescape()
                        .map_err(|e| PagelnetError::Graphml(e.to_string()))?;
                    current_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"data" => {
                    if let (Some(key), Some(p)) = (current_key.take(), pending.as_mut()) {
                        let value = typed_value(&key, current_text.trim())?;
                        match p {
                            Pending::Node { attrs, .. } => {
                                attrs.insert(key.name, value);
                            }
                            Pending::Edge { values, .. } => {
                                values.insert(key.name, value);
                            }
                        }
                    }
                    current_text.clear();
                }
                b"node" => {
                    if let Some(Pending::Node { id, attrs }) = pending.take() {
                        graph.add_node_with_attrs(&id, attrs);
                    }
                }
                b"edge" => {
                    if let Some(Pending::Edge {
                        source,
                        target,
                        values,
                    }) = pending.take()
                    {
                        commit_edge(&mut graph, source, target, values)?;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(PagelnetError::Graphml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(graph)
}

fn commit_edge(
    graph: &mut AssocGraph,
    source: String,
    target: String,
    mut values: AttrMap,
) -> Result<()> {
    // Endpoints must have been declared before the edge references them.
    for endpoint in [&source, &target] {
        if !graph.contains_node(endpoint) {
            return Err(PagelnetError::Graphml(format!(
                "edge {source}--{target} references undeclared node `{endpoint}`"
            )));
        }
    }
    let lr = take_numeric(&mut values, "lr", &source, &target)?;
    let p = take_numeric(&mut values, "p", &source, &target)?;
    graph.add_edge(&source, &target, EdgeStats { lr, p, attrs: values });
    Ok(())
}

fn take_numeric(
    values: &mut AttrMap,
    attr: &'static str,
    source: &str,
    target: &str,
) -> Result<f64> {
    match values.remove(attr) {
        Some(AttrValue::Number(n)) => Ok(n),
        _ => Err(PagelnetError::MalformedEdge {
            source_id: source.to_string(),
            target_id: target.to_string(),
            attr,
        }),
    }
}

fn declare_key(e: &BytesStart, keys: &mut HashMap<String, KeyDef>) -> Result<()> {
    let id = require_attr(e, "id")?;
    let name = attr(e, "attr.name")?.unwrap_or_else(|| id.clone());
    let ty = attr(e, "attr.type")?
        .map(|t| ValueType::from_decl(&t))
        .unwrap_or(ValueType::Text);
    keys.insert(id, KeyDef { name, ty });
    Ok(())
}

fn typed_value(key: &KeyDef, text: &str) -> Result<AttrValue> {
    match key.ty {
        ValueType::Double => text.parse::<f64>().map(AttrValue::Number).map_err(|_| {
            PagelnetError::Graphml(format!(
                "non-numeric value `{text}` for key `{}`",
                key.name
            ))
        }),
        ValueType::Boolean => match text {
            "true" | "1" => Ok(AttrValue::Bool(true)),
            "false" | "0" => Ok(AttrValue::Bool(false)),
            other => Err(PagelnetError::Graphml(format!(
                "non-boolean value `{other}` for key `{}`",
                key.name
            ))),
        },
        ValueType::Text => Ok(AttrValue::Text(text.to_string())),
    }
}

fn attr(e: &BytesStart, name: &str) -> Result<Option<String>> {
    let found = e
        .try_get_attribute(name)
        .map_err(|err| PagelnetError::Graphml(err.to_string()))?;
    match found {
        Some(a) => {
            let value = a
                .unescape_value()
                .map_err(|err| PagelnetError::Graphml(err.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

fn require_attr(e: &BytesStart, name: &str) -> Result<String> {
    attr(e, name)?.ok_or_else(|| {
        PagelnetError::Graphml(format!(
            "<{}> element missing `{name}` attribute",
            String::from_utf8_lossy(e.name().as_ref())
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="edge" attr.name="lr" attr.type="double"/>
  <key id="d1" for="edge" attr.name="p" attr.type="double"/>
  <key id="d2" for="node" attr.name="habitat" attr.type="string"/>
  <key id="d3" for="node" attr.name="core" attr.type="boolean"/>
  <graph edgedefault="undirected">
    <node id="A">
      <data key="d2">gut</data>
      <data key="d3">true</data>
    </node>
    <node id="B"/>
    <node id="C"/>
    <edge source="A" target="B">
      <data key="d0">100.0</data>
      <data key="d1">0.01</data>
    </edge>
    <edge source="B" target="C">
      <data key="d0">30</data>
      <data key="d1">0.2</data>
    </edge>
  </graph>
</graphml>"#;

    #[test]
    fn test_parse_nodes_edges_and_typed_attrs() {
        let g = parse_graphml(SAMPLE).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);

        let attrs = g.node_attrs("A").unwrap();
        assert_eq!(attrs.get("habitat"), Some(&AttrValue::Text("gut".into())));
        assert_eq!(attrs.get("core"), Some(&AttrValue::Bool(true)));

        let (u, v, stats) = g.edges().next().unwrap();
        assert_eq!((u.id.as_str(), v.id.as_str()), ("A", "B"));
        assert_eq!(stats.lr, 100.0);
        assert_eq!(stats.p, 0.01);
    }

    #[test]
    fn test_edge_missing_p_is_fatal() {
        let xml = r#"<graphml>
  <key id="d0" for="edge" attr.name="lr" attr.type="double"/>
  <graph edgedefault="undirected">
    <node id="A"/><node id="B"/>
    <edge source="A" target="B"><data key="d0">10</data></edge>
  </graph>
</graphml>"#;
        let err = parse_graphml(xml).unwrap_err();
        assert!(matches!(
            err,
            PagelnetError::MalformedEdge { attr: "p", .. }
        ));
    }

    #[test]
    fn test_edge_with_no_data_is_fatal() {
        let xml = r#"<graphml><graph edgedefault="undirected">
    <node id="A"/><node id="B"/>
    <edge source="A" target="B"/>
  </graph></graphml>"#;
        assert!(matches!(
            parse_graphml(xml).unwrap_err(),
            PagelnetError::MalformedEdge { attr: "lr", .. }
        ));
    }

    #[test]
    fn test_undeclared_endpoint_is_fatal() {
        let xml = r#"<graphml>
  <key id="d0" for="edge" attr.name="lr" attr.type="double"/>
  <key id="d1" for="edge" attr.name="p" attr.type="double"/>
  <graph edgedefault="undirected">
    <node id="A"/>
    <edge source="A" target="GHOST">
      <data key="d0">10</data><data key="d1">0.1</data>
    </edge>
  </graph></graphml>"#;
        assert!(matches!(
            parse_graphml(xml).unwrap_err(),
            PagelnetError::Graphml(_)
        ));
    }

    #[test]
    fn test_non_numeric_lr_is_fatal() {
        let xml = r#"<graphml>
  <key id="d0" for="edge" attr.name="lr" attr.type="double"/>
  <key id="d1" for="edge" attr.name="p" attr.type="double"/>
  <graph edgedefault="undirected">
    <node id="A"/><node id="B"/>
    <edge source="A" target="B">
      <data key="d0">not-a-number</data><data key="d1">0.1</data>
    </edge>
  </graph></graphml>"#;
        assert!(parse_graphml(xml).is_err());
    }

    #[test]
    fn test_extra_edge_attrs_pass_through() {
        let xml = r#"<graphml>
  <key id="d0" for="edge" attr.name="lr" attr.type="double"/>
  <key id="d1" for="edge" attr.name="p" attr.type="double"/>
  <key id="d2" for="edge" attr.name="method" attr.type="string"/>
  <graph edgedefault="undirected">
    <node id="A"/><node id="B"/>
    <edge source="A" target="B">
      <data key="d0">75</data><data key="d1">0.02</data>
      <data key="d2">pagel</data>
    </edge>
  </graph></graphml>"#;
        let g = parse_graphml(xml).unwrap();
        let (_, _, stats) = g.edges().next().unwrap();
        assert_eq!(
            stats.attrs.get("method"),
            Some(&AttrValue::Text("pagel".into()))
        );
    }
}
