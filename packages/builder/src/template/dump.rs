//! Canonical dump
//!
//! Projects a built tree onto the small JSON shape fixtures are written in:
//! a string for text, `{name, attr?, children?}` for elements and
//! `{name: "DOCUMENT_FRAGMENT", children?}` for fragments.

use super::ast::{Built, Element, Fragment, Node};
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

/// Name reported for a fragment
pub const FRAGMENT_MARKER: &str = "DOCUMENT_FRAGMENT";

pub fn dump(built: &Built) -> JsonValue {
    match built {
        Built::Text(text) => JsonValue::String(text.clone()),
        Built::Element(element) => dump_element(element),
        Built::Fragment(fragment) => dump_fragment(fragment),
    }
}

pub fn dump_node(node: &Node) -> JsonValue {
    match node {
        Node::Text(text) => JsonValue::String(text.clone()),
        Node::Element(element) => dump_element(element),
    }
}

fn dump_element(element: &Element) -> JsonValue {
    let mut object = Map::new();
    object.insert("name".to_string(), JsonValue::String(element.name.to_ascii_uppercase()));
    if !element.attrs.is_empty() {
        object.insert("attr".to_string(), JsonValue::String(attr_string(&element.attrs)));
    }
    if !element.children.is_empty() {
        object.insert("children".to_string(), dump_children(&element.children));
    }
    JsonValue::Object(object)
}

fn dump_fragment(fragment: &Fragment) -> JsonValue {
    let mut object = Map::new();
    object.insert("name".to_string(), JsonValue::String(FRAGMENT_MARKER.to_string()));
    if !fragment.is_empty() {
        object.insert("children".to_string(), dump_children(&fragment.children));
    }
    JsonValue::Object(object)
}

fn dump_children(children: &[Node]) -> JsonValue {
    JsonValue::Array(children.iter().map(dump_node).collect())
}

/// `key` or `key=value` per attribute, space separated, in insertion order
pub fn attr_string(attrs: &IndexMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(name, value)| {
            if value.is_empty() {
                name.clone()
            } else {
                format!("{}={}", name, value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
