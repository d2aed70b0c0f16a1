//! Interpolation values
//!
//! A closed set of everything that can be placed into a template slot. The
//! resolver decides per slot kind what each variant turns into.

use crate::template::ast::{Built, Element, Fragment, Node};

/// A value interpolated into a template
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (`None`); renders as nothing
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// A single node, typically an element from a nested build
    Node(Node),
    /// Several top-level nodes from a nested build
    Fragment(Fragment),
    /// A list of values spliced one after another
    Sequence(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Node(Node::Text(_)) => "text node",
            Value::Node(Node::Element(_)) => "element",
            Value::Fragment(_) => "fragment",
            Value::Sequence(_) => "sequence",
        }
    }
}

/// Format a number the way JavaScript's `String(n)` does for the common
/// cases: integral values have no fractional part, and the non-finite values
/// are spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Value::Node(Node::Element(value))
    }
}

impl From<Fragment> for Value {
    fn from(value: Fragment) -> Self {
        Value::Fragment(value)
    }
}

impl From<Built> for Value {
    fn from(value: Built) -> Self {
        match value {
            Built::Text(text) => Value::Str(text),
            Built::Element(element) => Value::Node(Node::Element(element)),
            Built::Fragment(fragment) => Value::Fragment(fragment),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
