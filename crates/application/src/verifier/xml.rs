//! XML-to-tree conversion.
//!
//! Parsed XML is reshaped into the same `serde_json::Value` form JSON
//! bodies take, so the path resolver operates over one stable shape.
//!
//! Mapping rules:
//! - an element with only text becomes a string scalar;
//! - repeated sibling elements with the same name collect into an array;
//! - attributes live under a `"$"` key;
//! - text alongside child elements lives under a `"_"` key.
//!
//! So `<r><a>5</a></r>` becomes `{"r": {"a": "5"}}` and `r.a` resolves
//! to `"5"`.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

/// Parses an XML body into a value tree rooted at the document element's
/// name.
pub fn parse(body: &str) -> Result<Value, roxmltree::Error> {
    let doc = Document::parse(body)?;
    let root = doc.root_element();

    let mut tree = Map::new();
    tree.insert(root.tag_name().name().to_string(), convert(root));
    Ok(Value::Object(tree))
}

fn convert(node: Node<'_, '_>) -> Value {
    let mut map = Map::new();

    let attributes: Map<String, Value> = node
        .attributes()
        .map(|a| (a.name().to_string(), Value::String(a.value().to_string())))
        .collect();
    if !attributes.is_empty() {
        map.insert("$".to_string(), Value::Object(attributes));
    }

    // Group child elements by name, preserving sibling order per name.
    let mut children: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for child in node.children().filter(Node::is_element) {
        children
            .entry(child.tag_name().name().to_string())
            .or_default()
            .push(convert(child));
    }

    let text: String = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect::<String>()
        .trim()
        .to_string();

    if map.is_empty() && children.is_empty() {
        return Value::String(text);
    }

    for (name, mut values) in children {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };
        map.insert(name, value);
    }

    if !text.is_empty() {
        map.insert("_".to_string(), Value::String(text));
    }

    Value::Object(map)
}
