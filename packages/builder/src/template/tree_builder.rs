//! Tree Builder
//!
//! Converts the token stream into elements and text. Slots are resolved as
//! they are met, so nested builds and sequences are spliced in place and
//! fragments never nest.

use super::ast::{Element, Node};
use super::html_tags::is_void_element;
use super::resolver::InterpolationResolver;
use super::tokens::{Part, Token};
use crate::chars;
use crate::config::BuildOptions;
use crate::error::{BuildError, Result};
use crate::parse_util::{ParseError, ParseLocation, TemplateSource};
use crate::value::Value;

/// Internal tree builder
pub(crate) struct TreeBuilder<'a> {
    source: &'a TemplateSource,
    options: &'a BuildOptions,
    resolver: InterpolationResolver,
    /// Element whose opening tag is being read
    start_tag: Option<Element>,
    /// Open elements, innermost last
    stack: Vec<Element>,
    root_nodes: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(source: &'a TemplateSource, options: &'a BuildOptions, values: Vec<Value>) -> Self {
        TreeBuilder {
            source,
            options,
            resolver: InterpolationResolver::new(values),
            start_tag: None,
            stack: Vec::new(),
            root_nodes: Vec::new(),
        }
    }

    /// Consume all tokens and return the top-level nodes
    pub(crate) fn build(mut self, tokens: Vec<Token>) -> Result<Vec<Node>> {
        for token in tokens {
            match token {
                Token::Text { value, .. } => self.add_to_parent(Node::Text(value)),
                Token::Child { slot, .. } => {
                    let mut nodes = Vec::new();
                    self.resolver.resolve_child(slot, &mut nodes)?;
                    for node in nodes {
                        self.add_to_parent(node);
                    }
                }
                Token::TagOpenStart { name, location } => self.consume_tag_open_start(&name, location)?,
                Token::Attr { name, value, location } => {
                    self.consume_attr(&name, value.as_deref(), location)?
                }
                Token::TagOpenEnd { self_closing, location } => {
                    self.consume_tag_open_end(self_closing, location)?
                }
                Token::TagClose { name, location } => self.consume_tag_close(&name, location)?,
                Token::Comment { .. } => {}
            }
        }

        // Elements still open at the end of the template close implicitly
        while let Some(element) = self.stack.pop() {
            self.add_to_parent(Node::Element(element));
        }

        if self.options.drop_root_whitespace {
            self.root_nodes.retain(|node| !node.is_whitespace_text());
        }
        Ok(self.root_nodes)
    }

    fn consume_tag_open_start(&mut self, name: &[Part], location: ParseLocation) -> Result<()> {
        let name = self.resolver.resolve_text(name)?;
        if !is_valid_tag_name(&name) {
            return Err(self.error(location, format!("Invalid tag name \"{}\"", name)));
        }
        self.start_tag = Some(Element::new(name));
        Ok(())
    }

    fn consume_attr(&mut self, name: &[Part], value: Option<&[Part]>, location: ParseLocation) -> Result<()> {
        let name = self.resolver.resolve_text(name)?.to_ascii_lowercase();
        let resolved = match value {
            Some(parts) => self.resolver.resolve_attr_value(parts)?,
            None => Some(String::new()),
        };

        if name.is_empty() {
            // `<input ${cond ? 'checked' : ''}>` leaves nothing to set
            if value.is_none() {
                return Ok(());
            }
            return Err(self.error(location, "Attribute value without an attribute name"));
        }
        if name.chars().any(chars::is_forbidden_in_name) {
            return Err(self.error(location, format!("Invalid attribute name \"{}\"", name)));
        }

        let Some(element) = self.start_tag.as_mut() else {
            return Err(self.error(location, "Attribute outside of an opening tag"));
        };
        match resolved {
            Some(value) => {
                element.attrs.insert(name, value);
            }
            None => {
                element.attrs.shift_remove(&name);
            }
        }
        Ok(())
    }

    fn consume_tag_open_end(&mut self, self_closing: bool, location: ParseLocation) -> Result<()> {
        let Some(element) = self.start_tag.take() else {
            return Err(self.error(location, "Unexpected end of an opening tag"));
        };
        if is_void_element(&element.name) || (self_closing && self.options.self_closing_tags) {
            self.add_to_parent(Node::Element(element));
        } else {
            self.stack.push(element);
        }
        Ok(())
    }

    fn consume_tag_close(&mut self, name: &[Part], location: ParseLocation) -> Result<()> {
        let name = self.resolver.resolve_text(name)?;
        if is_void_element(&name) {
            return Err(self.error(location, format!("Void elements do not have end tags \"{}\"", name)));
        }

        let matches_current = match self.stack.last() {
            Some(open) => open.name.eq_ignore_ascii_case(&name),
            None => {
                return Err(self.error(location, format!("Unexpected closing tag \"{}\"", name)));
            }
        };
        if !matches_current {
            let open = self.stack.last().map(|e| e.name.clone()).unwrap_or_default();
            return Err(self.error(
                location,
                format!("Unexpected closing tag \"{}\", expected \"</{}>\"", name, open),
            ));
        }

        if let Some(element) = self.stack.pop() {
            self.add_to_parent(Node::Element(element));
        }
        Ok(())
    }

    fn add_to_parent(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root_nodes.push(node),
        }
    }

    fn error(&self, location: ParseLocation, msg: impl Into<String>) -> BuildError {
        ParseError::new(self.source, location, msg).into()
    }
}

/// Tag names start with an ASCII letter and contain nothing that would end
/// a tag name in markup
fn is_valid_tag_name(name: &str) -> bool {
    let mut chars_iter = name.chars();
    match chars_iter.next() {
        Some(first) if chars::is_ascii_letter(first) => !chars_iter.any(chars::is_forbidden_in_name),
        _ => false,
    }
}
