//! Parse Utilities
//!
//! Source bookkeeping for templates: the literal segments, locations inside
//! them, and the located `ParseError` reported by the lexer and tree builder.

use crate::chars;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static CR_OR_CRLF_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());

/// The literal side of a template: `N` segments surrounding `N - 1` slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateSource {
    pub segments: Vec<String>,
}

impl TemplateSource {
    pub fn new<S: AsRef<str>>(segments: &[S]) -> Self {
        TemplateSource {
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Same as `new`, with CR and CRLF line endings rewritten to LF
    pub fn normalized<S: AsRef<str>>(segments: &[S]) -> Self {
        TemplateSource {
            segments: segments
                .iter()
                .map(|s| CR_OR_CRLF_REGEXP.replace_all(s.as_ref(), "\n").into_owned())
                .collect(),
        }
    }

    /// Number of interpolation slots the segments leave room for
    pub fn slot_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Build a location for `offset` (bytes) inside `segment`.
    ///
    /// Line and column count through every preceding segment; slots occupy
    /// no columns.
    pub fn location(&self, segment: usize, offset: usize) -> ParseLocation {
        let mut line = 0;
        let mut col = 0;
        let preceding = self.segments.iter().take(segment).map(String::as_str);
        let current = self
            .segments
            .get(segment)
            .map(|s| &s[..offset.min(s.len())])
            .into_iter();
        for text in preceding.chain(current) {
            for ch in text.chars() {
                if ch == chars::NEWLINE {
                    line += 1;
                    col = 0;
                } else {
                    col += 1;
                }
            }
        }
        ParseLocation { segment, offset, line, col }
    }

    /// Return the text around a location, up to `max_chars` on each side,
    /// without crossing into neighbouring segments
    pub fn context(&self, location: &ParseLocation, max_chars: usize) -> Option<(String, String)> {
        let content = self.segments.get(location.segment)?;
        let offset = location.offset.min(content.len());
        let (head, tail) = content.split_at(offset);
        let before: String = {
            let skip = head.chars().count().saturating_sub(max_chars);
            head.chars().skip(skip).collect()
        };
        let after: String = tail.chars().take(max_chars).collect();
        Some((before, after))
    }
}

/// A position inside a template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseLocation {
    /// Index of the literal segment
    pub segment: usize,
    /// Byte offset inside that segment
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment {}@{}:{}", self.segment, self.line, self.col)
    }
}

/// Structurally invalid template text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseError {
    pub location: ParseLocation,
    pub msg: String,
    /// Source excerpt around the location, `(before, after)`
    pub context: Option<(String, String)>,
}

impl ParseError {
    pub fn new(source: &TemplateSource, location: ParseLocation, msg: impl Into<String>) -> Self {
        ParseError {
            location,
            msg: msg.into(),
            context: source.context(&location, 20),
        }
    }

    pub fn contextual_message(&self) -> String {
        match &self.context {
            Some((before, after)) => format!("{} (\"{}[ERROR ->]{}\")", self.msg, before, after),
            None => self.msg.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.contextual_message(), self.location)
    }
}

impl std::error::Error for ParseError {}
