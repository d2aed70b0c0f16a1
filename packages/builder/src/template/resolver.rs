//! Interpolation Resolver
//!
//! Turns the value behind each slot into what its position calls for: a
//! string for names and attribute values, an optional string for whole
//! attribute values (boolean-attribute rule), or a run of nodes for content.

use super::ast::Node;
use super::tokens::{Part, Slot, SlotKind};
use crate::error::{BuildError, Result};
use crate::value::{format_number, Value};

/// Owns the values of one build; each slot's value is taken exactly once
pub struct InterpolationResolver {
    values: Vec<Option<Value>>,
}

impl InterpolationResolver {
    pub fn new(values: Vec<Value>) -> Self {
        InterpolationResolver {
            values: values.into_iter().map(Some).collect(),
        }
    }

    fn take(&mut self, slot: Slot) -> Value {
        self.values
            .get_mut(slot.index)
            .and_then(Option::take)
            .unwrap_or(Value::Null)
    }

    /// Join literal pieces and coerced slot values, left to right
    pub fn resolve_text(&mut self, parts: &[Part]) -> Result<String> {
        let mut out = String::new();
        for part in parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Slot(slot) => {
                    let value = self.take(*slot);
                    out.push_str(&coerce_to_string(&value, slot.kind)?);
                }
            }
        }
        Ok(out)
    }

    /// Resolve an attribute value. `None` means the attribute must not exist.
    pub fn resolve_attr_value(&mut self, parts: &[Part]) -> Result<Option<String>> {
        match parts {
            [Part::Slot(slot)] if slot.kind == SlotKind::WholeAttrValue => {
                let value = self.take(*slot);
                resolve_whole_attr_value(&value)
            }
            _ => self.resolve_text(parts).map(Some),
        }
    }

    /// Resolve a child slot, appending the resulting nodes to `out`
    pub fn resolve_child(&mut self, slot: Slot, out: &mut Vec<Node>) -> Result<()> {
        let value = self.take(slot);
        splice_child(value, out)
    }
}

/// String coercion for name and partial-value positions
pub fn coerce_to_string(value: &Value, kind: SlotKind) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(n) => Ok(format_number(*n)),
        Value::Str(text) => Ok(text.clone()),
        Value::Node(_) | Value::Fragment(_) | Value::Sequence(_) => {
            Err(BuildError::UnsupportedInterpolation {
                kind,
                found: value.type_name(),
            })
        }
    }
}

/// Boolean-attribute rule for a value that makes up the whole attribute value
pub fn resolve_whole_attr_value(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some(String::new())),
        other => coerce_to_string(other, SlotKind::WholeAttrValue).map(Some),
    }
}

/// Splice a content value: fragments contribute their members, sequences
/// are resolved item by item, so fragments never end up nested
pub fn splice_child(value: Value, out: &mut Vec<Node>) -> Result<()> {
    match value {
        Value::Null => {}
        Value::Str(text) => {
            if !text.is_empty() {
                out.push(Node::Text(text));
            }
        }
        Value::Number(n) => out.push(Node::Text(format_number(n))),
        Value::Node(node) => out.push(node),
        Value::Fragment(fragment) => out.extend(fragment.children),
        Value::Sequence(items) => {
            for item in items {
                splice_child(item, out)?;
            }
        }
        Value::Bool(flag) => {
            return Err(BuildError::UnsupportedInterpolation {
                kind: SlotKind::Child,
                found: Value::Bool(flag).type_name(),
            });
        }
    }
    Ok(())
}
