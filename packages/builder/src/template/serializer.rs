//! HTML Serializer
//!
//! Renders a built tree back to markup.

use super::ast::{Built, Element, Node};
use super::html_tags::is_void_element;
use std::fmt;

pub struct HtmlSerializer {
    out: String,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        HtmlSerializer { out: String::new() }
    }

    pub fn visit_element(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(&element.name);
        for (name, value) in &element.attrs {
            self.visit_attribute(name, value);
        }
        self.out.push('>');

        if is_void_element(&element.name) {
            return;
        }
        self.visit_all(&element.children);
        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
    }

    pub fn visit_attribute(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        if !value.is_empty() {
            self.out.push_str("=\"");
            escape_into(&mut self.out, value, true);
            self.out.push('"');
        }
    }

    pub fn visit_text(&mut self, text: &str) {
        escape_into(&mut self.out, text, false);
    }

    pub fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.visit_text(text),
            Node::Element(element) => self.visit_element(element),
        }
    }

    pub fn visit_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.visit_node(node);
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_into(out: &mut String, text: &str, in_attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' if in_attr => out.push_str("&quot;"),
            '<' if !in_attr => out.push_str("&lt;"),
            '>' if !in_attr => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut serializer = HtmlSerializer::new();
        serializer.visit_node(self);
        serializer.finish()
    }
}

impl Built {
    pub fn to_html(&self) -> String {
        let mut serializer = HtmlSerializer::new();
        match self {
            Built::Text(text) => serializer.visit_text(text),
            Built::Element(element) => serializer.visit_element(element),
            Built::Fragment(fragment) => serializer.visit_all(&fragment.children),
        }
        serializer.finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for Built {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
