//! Template Module
//!
//! Tokenizes the literal segments of a template, resolves interpolated values
//! per slot position and assembles the element/text tree.

pub mod ast;
pub mod dump;
pub mod entities;
pub mod html_tags;
pub mod lexer;
pub mod resolver;
pub mod serializer;
pub mod tokens;
pub(crate) mod tree_builder;

pub use ast::*;
pub use dump::{attr_string, dump, dump_node, FRAGMENT_MARKER};
pub use html_tags::is_void_element;
pub use lexer::tokenize;
pub use serializer::HtmlSerializer;
pub use tokens::{Part, Parts, Slot, SlotKind, Token};
