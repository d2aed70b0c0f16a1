//! Template Tokens
//!
//! The lexer output: literal markup pieces plus interpolation slots, each slot
//! tagged with the syntactic position it was found in.

use crate::parse_util::ParseLocation;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Syntactic position of an interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Inside an opening or closing tag name: `<${x}>`, `</h${x}>`
    TagName,
    /// Inside an attribute name: `<div ${x}=1>`, `<div data-${x}>`
    AttrName,
    /// Part of an attribute value that also has other content: `class=${x}-bar`
    AttrValue,
    /// The entire attribute value: `disabled=${x}`
    WholeAttrValue,
    /// Element content or top-level content
    Child,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotKind::TagName => "tag name",
            SlotKind::AttrName => "attribute name",
            SlotKind::AttrValue => "attribute value",
            SlotKind::WholeAttrValue => "whole attribute value",
            SlotKind::Child => "child",
        };
        f.write_str(name)
    }
}

/// An interpolation: index into the template's values plus its position kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub kind: SlotKind,
}

impl Slot {
    pub fn new(index: usize, kind: SlotKind) -> Self {
        Slot { index, kind }
    }
}

/// One piece of a composite tag name, attribute name or attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    Literal(String),
    Slot(Slot),
}

/// Composite names are usually one or two pieces long
pub type Parts = SmallVec<[Part; 2]>;

/// All token variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Token {
    /// Literal text with character references already decoded
    Text { value: String, location: ParseLocation },
    /// Interpolation in content position
    Child { slot: Slot, location: ParseLocation },
    /// `<name`
    TagOpenStart { name: Parts, location: ParseLocation },
    /// `name`, `name=value`, `name="value"` inside an opening tag
    Attr {
        name: Parts,
        value: Option<Parts>,
        location: ParseLocation,
    },
    /// `>` or `/>`
    TagOpenEnd {
        self_closing: bool,
        location: ParseLocation,
    },
    /// `</name>`
    TagClose { name: Parts, location: ParseLocation },
    /// `<!-- value -->`
    Comment { value: String, location: ParseLocation },
}

impl Token {
    pub fn location(&self) -> &ParseLocation {
        match self {
            Token::Text { location, .. }
            | Token::Child { location, .. }
            | Token::TagOpenStart { location, .. }
            | Token::Attr { location, .. }
            | Token::TagOpenEnd { location, .. }
            | Token::TagClose { location, .. }
            | Token::Comment { location, .. } => location,
        }
    }

    /// Every slot carried by this token, in template order
    pub fn slots(&self) -> Vec<Slot> {
        fn collect(parts: &[Part], out: &mut Vec<Slot>) {
            out.extend(parts.iter().filter_map(|part| match part {
                Part::Slot(slot) => Some(*slot),
                Part::Literal(_) => None,
            }));
        }

        let mut slots = Vec::new();
        match self {
            Token::Child { slot, .. } => slots.push(*slot),
            Token::TagOpenStart { name, .. } | Token::TagClose { name, .. } => {
                collect(name, &mut slots)
            }
            Token::Attr { name, value, .. } => {
                collect(name, &mut slots);
                if let Some(value) = value {
                    collect(value, &mut slots);
                }
            }
            Token::Text { .. } | Token::TagOpenEnd { .. } | Token::Comment { .. } => {}
        }
        slots
    }
}
