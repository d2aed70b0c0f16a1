//! Template AST
//!
//! Element/text node definitions and the result of a build

use crate::chars;
use indexmap::IndexMap;

/// Node type union
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Text node made of HTML whitespace only
    pub fn is_whitespace_text(&self) -> bool {
        matches!(self, Node::Text(text) if chars::is_whitespace_only(text))
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name as written in the template
    pub name: String,
    /// Attributes in first-written order; an empty value is a bare attribute
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Several top-level nodes without a parent. Never contains another fragment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Fragment { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Result of one build
#[derive(Debug, Clone, PartialEq)]
pub enum Built {
    /// The template produced a single text node
    Text(String),
    /// The template produced a single element
    Element(Element),
    /// The template produced zero or several top-level nodes
    Fragment(Fragment),
}

impl Built {
    /// Collapse the top-level nodes of a build: a lone node is returned as
    /// itself, anything else is wrapped in a fragment
    pub fn from_roots(mut roots: Vec<Node>) -> Self {
        if roots.len() == 1 {
            if let Some(node) = roots.pop() {
                return match node {
                    Node::Text(text) => Built::Text(text),
                    Node::Element(element) => Built::Element(element),
                };
            }
        }
        Built::Fragment(Fragment::new(roots))
    }

    /// The top-level nodes, whatever the shape
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Built::Text(text) => vec![Node::Text(text)],
            Built::Element(element) => vec![Node::Element(element)],
            Built::Fragment(fragment) => fragment.children,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Built::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Built::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Built::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}
