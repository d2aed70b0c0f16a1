//! Template Lexer
//!
//! Walks the literal segments of a template forward, one character at a time,
//! with an explicit HTML tag/attribute state machine. Between two segments the
//! current state decides what kind of slot the interpolation occupies, and the
//! in-progress tag name / attribute name / attribute value accumulates literal
//! text and slots alike until a terminating whitespace, `=` or `>` shows up.

use super::entities::decode_entities;
use super::tokens::*;
use crate::chars;
use crate::parse_util::{ParseError, ParseLocation, TemplateSource};
use std::mem;

/// Tokenize a template into literal tokens and classified slots
pub fn tokenize(source: &TemplateSource) -> Result<Vec<Token>, ParseError> {
    let mut tokenizer = Tokenizer::new(source);
    tokenizer.tokenize()?;
    Ok(tokenizer.tokens)
}

/// Lexer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Text content, outside of any tag
    Outside,
    /// Just consumed `<`
    TagOpen,
    InTagName,
    /// Just consumed `</`
    CloseTagOpen,
    InCloseTagName,
    AfterCloseTagName,
    /// Inside an opening tag, before an attribute name
    InOpenTag,
    InAttrName,
    AfterAttrName,
    BeforeAttrValue,
    InAttrValue { quote: Option<char> },
    /// Consumed `/` inside an opening tag
    SelfClosing,
    /// Consumed `<!`, counting the dashes of a possible `<!--`
    MarkupDeclaration { dashes: u8 },
    InComment,
    InDeclaration,
}

/// Whether the current character is done with or must be looked at again
/// in the new state
enum Step {
    Next,
    Reconsume,
}

struct Tokenizer<'a> {
    source: &'a TemplateSource,
    state: LexState,
    location: ParseLocation,
    tokens: Vec<Token>,
    /// Pending raw text content
    text: String,
    text_start: ParseLocation,
    /// Location of the `<` that opened the current tag
    tag_start: ParseLocation,
    attr_start: ParseLocation,
    /// Literal characters not yet moved into a name or value
    literal: String,
    tag_name: Parts,
    attr_name: Parts,
    attr_value: Option<Parts>,
    markup: String,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a TemplateSource) -> Self {
        let start = ParseLocation { segment: 0, offset: 0, line: 0, col: 0 };
        Tokenizer {
            source,
            state: LexState::Outside,
            location: start,
            tokens: Vec::new(),
            text: String::new(),
            text_start: start,
            tag_start: start,
            attr_start: start,
            literal: String::new(),
            tag_name: Parts::new(),
            attr_name: Parts::new(),
            attr_value: None,
            markup: String::new(),
        }
    }

    fn tokenize(&mut self) -> Result<(), ParseError> {
        let source = self.source;
        for (segment, content) in source.segments.iter().enumerate() {
            self.location.segment = segment;
            self.location.offset = 0;
            if segment > 0 {
                self.consume_slot(segment - 1)?;
            }
            for (offset, ch) in content.char_indices() {
                self.location.offset = offset;
                while let Step::Reconsume = self.consume_char(ch)? {}
                if ch == chars::NEWLINE {
                    self.location.line += 1;
                    self.location.col = 0;
                } else {
                    self.location.col += 1;
                }
            }
            self.location.offset = content.len();
        }
        self.consume_eof()
    }

    fn consume_char(&mut self, ch: char) -> Result<Step, ParseError> {
        match self.state {
            LexState::Outside => {
                if ch == chars::LT {
                    self.tag_start = self.location;
                    self.state = LexState::TagOpen;
                } else {
                    self.push_text(ch);
                }
            }
            LexState::TagOpen => {
                if chars::is_ascii_letter(ch) {
                    self.flush_text();
                    self.literal.push(ch);
                    self.state = LexState::InTagName;
                } else if ch == chars::SLASH {
                    self.flush_text();
                    self.state = LexState::CloseTagOpen;
                } else if ch == chars::BANG {
                    self.flush_text();
                    self.state = LexState::MarkupDeclaration { dashes: 0 };
                } else {
                    // A lone `<` is plain text
                    self.push_text_at(chars::LT, self.tag_start);
                    self.state = LexState::Outside;
                    return Ok(Step::Reconsume);
                }
            }
            LexState::InTagName => {
                if chars::is_tag_name_end(ch) {
                    self.flush_literal_into_tag_name();
                    self.emit_tag_open_start();
                    return self.after_name(ch);
                }
                self.literal.push(ch);
            }
            LexState::CloseTagOpen => {
                if chars::is_ascii_letter(ch) {
                    self.literal.push(ch);
                    self.state = LexState::InCloseTagName;
                } else {
                    return Err(self.error("Malformed closing tag, expected a tag name after \"</\""));
                }
            }
            LexState::InCloseTagName => {
                if chars::is_whitespace(ch) {
                    self.flush_literal_into_tag_name();
                    self.state = LexState::AfterCloseTagName;
                } else if ch == chars::GT {
                    self.flush_literal_into_tag_name();
                    self.emit_tag_close();
                } else if ch == chars::SLASH {
                    return Err(self.error("Unexpected \"/\" in closing tag"));
                } else {
                    self.literal.push(ch);
                }
            }
            LexState::AfterCloseTagName => {
                if ch == chars::GT {
                    self.emit_tag_close();
                } else if !chars::is_whitespace(ch) {
                    return Err(self.error(format!("Unexpected character \"{}\" in closing tag", ch)));
                }
            }
            LexState::InOpenTag => {
                if chars::is_whitespace(ch) {
                    // skip
                } else if ch == chars::SLASH {
                    self.state = LexState::SelfClosing;
                } else if ch == chars::GT {
                    self.emit_tag_open_end(false);
                } else if ch == chars::EQ || ch == chars::LT || chars::is_quote(ch) || ch == chars::BT {
                    return Err(self.error(format!("Unexpected character \"{}\" in tag", ch)));
                } else {
                    self.start_attr();
                    self.literal.push(ch);
                }
            }
            LexState::InAttrName => {
                if chars::is_whitespace(ch) {
                    self.flush_literal_into_attr_name();
                    self.state = LexState::AfterAttrName;
                } else if ch == chars::EQ {
                    self.flush_literal_into_attr_name();
                    self.state = LexState::BeforeAttrValue;
                } else if ch == chars::SLASH || ch == chars::GT {
                    self.flush_literal_into_attr_name();
                    self.emit_attr();
                    return self.after_name(ch);
                } else if ch == chars::LT || chars::is_quote(ch) || ch == chars::BT {
                    return Err(self.error(format!("Unexpected character \"{}\" in attribute name", ch)));
                } else {
                    self.literal.push(ch);
                }
            }
            LexState::AfterAttrName => {
                if chars::is_whitespace(ch) {
                    // skip
                } else if ch == chars::EQ {
                    self.state = LexState::BeforeAttrValue;
                } else {
                    self.emit_attr();
                    self.state = LexState::InOpenTag;
                    return Ok(Step::Reconsume);
                }
            }
            LexState::BeforeAttrValue => {
                if chars::is_whitespace(ch) {
                    // skip
                } else if chars::is_quote(ch) {
                    self.attr_value = Some(Parts::new());
                    self.state = LexState::InAttrValue { quote: Some(ch) };
                } else if ch == chars::GT {
                    // `name=>`: present, with an empty value
                    self.attr_value = Some(Parts::new());
                    self.emit_attr();
                    self.emit_tag_open_end(false);
                } else {
                    self.attr_value = Some(Parts::new());
                    self.literal.push(ch);
                    self.state = LexState::InAttrValue { quote: None };
                }
            }
            LexState::InAttrValue { quote: Some(quote) } => {
                if ch == quote {
                    self.flush_literal_into_attr_value();
                    self.emit_attr();
                    self.state = LexState::InOpenTag;
                } else {
                    self.literal.push(ch);
                }
            }
            LexState::InAttrValue { quote: None } => {
                if chars::is_whitespace(ch) {
                    self.flush_literal_into_attr_value();
                    self.emit_attr();
                    self.state = LexState::InOpenTag;
                } else if ch == chars::GT {
                    self.flush_literal_into_attr_value();
                    self.emit_attr();
                    self.emit_tag_open_end(false);
                } else {
                    self.literal.push(ch);
                }
            }
            LexState::SelfClosing => {
                if ch == chars::GT {
                    self.emit_tag_open_end(true);
                } else {
                    self.state = LexState::InOpenTag;
                    return Ok(Step::Reconsume);
                }
            }
            LexState::MarkupDeclaration { dashes } => {
                if ch == chars::MINUS && dashes == 0 {
                    self.state = LexState::MarkupDeclaration { dashes: 1 };
                } else if ch == chars::MINUS {
                    self.markup.clear();
                    self.state = LexState::InComment;
                } else {
                    self.state = LexState::InDeclaration;
                    return Ok(Step::Reconsume);
                }
            }
            LexState::InComment => {
                self.markup.push(ch);
                if let Some(value) = self.markup.strip_suffix("-->") {
                    self.tokens.push(Token::Comment {
                        value: value.to_string(),
                        location: self.tag_start,
                    });
                    self.markup.clear();
                    self.state = LexState::Outside;
                }
            }
            LexState::InDeclaration => {
                // `<!DOCTYPE ...>` and friends carry nothing for the tree
                if ch == chars::GT {
                    self.state = LexState::Outside;
                }
            }
        }
        Ok(Step::Next)
    }

    /// Classify the interpolation sitting between the current segment and
    /// the next one, and attach it to whatever the state machine is building
    fn consume_slot(&mut self, index: usize) -> Result<(), ParseError> {
        let kind = match self.state {
            LexState::Outside => {
                self.flush_text();
                let slot = Slot::new(index, SlotKind::Child);
                self.tokens.push(Token::Child { slot, location: self.location });
                SlotKind::Child
            }
            LexState::TagOpen => {
                self.flush_text();
                self.tag_name.push(Part::Slot(Slot::new(index, SlotKind::TagName)));
                self.state = LexState::InTagName;
                SlotKind::TagName
            }
            LexState::CloseTagOpen | LexState::InTagName | LexState::InCloseTagName => {
                self.flush_literal_into_tag_name();
                self.tag_name.push(Part::Slot(Slot::new(index, SlotKind::TagName)));
                if self.state == LexState::CloseTagOpen {
                    self.state = LexState::InCloseTagName;
                }
                SlotKind::TagName
            }
            LexState::InOpenTag | LexState::SelfClosing | LexState::AfterAttrName => {
                if self.state == LexState::AfterAttrName {
                    self.emit_attr();
                }
                self.start_attr();
                self.attr_name.push(Part::Slot(Slot::new(index, SlotKind::AttrName)));
                SlotKind::AttrName
            }
            LexState::InAttrName => {
                self.flush_literal_into_attr_name();
                self.attr_name.push(Part::Slot(Slot::new(index, SlotKind::AttrName)));
                SlotKind::AttrName
            }
            LexState::BeforeAttrValue | LexState::InAttrValue { .. } => {
                if self.state == LexState::BeforeAttrValue {
                    self.attr_value = Some(Parts::new());
                    self.state = LexState::InAttrValue { quote: None };
                }
                self.flush_literal_into_attr_value();
                // Provisional: `emit_attr` settles AttrValue vs WholeAttrValue
                let slot = Part::Slot(Slot::new(index, SlotKind::AttrValue));
                self.attr_value.get_or_insert_with(Parts::new).push(slot);
                SlotKind::AttrValue
            }
            LexState::AfterCloseTagName => {
                return Err(self.error("Interpolation is not allowed after a closing tag name"));
            }
            LexState::MarkupDeclaration { .. } | LexState::InComment | LexState::InDeclaration => {
                return Err(self.error("Interpolation is not allowed inside a comment or declaration"));
            }
        };
        log::trace!("slot {} classified as {:?} ({:?})", index, kind, self.state);
        Ok(())
    }

    fn consume_eof(&mut self) -> Result<(), ParseError> {
        match self.state {
            LexState::Outside => {}
            LexState::TagOpen => self.push_text_at(chars::LT, self.tag_start),
            LexState::MarkupDeclaration { .. } | LexState::InComment | LexState::InDeclaration => {
                return Err(self.error("Unterminated comment"));
            }
            _ => return Err(self.error("Unterminated tag")),
        }
        self.flush_text();
        Ok(())
    }

    /// Transition after a tag or attribute name ended on `ch`
    fn after_name(&mut self, ch: char) -> Result<Step, ParseError> {
        if ch == chars::GT {
            self.emit_tag_open_end(false);
        } else if ch == chars::SLASH {
            self.state = LexState::SelfClosing;
        } else {
            self.state = LexState::InOpenTag;
        }
        Ok(Step::Next)
    }

    fn push_text(&mut self, ch: char) {
        self.push_text_at(ch, self.location);
    }

    fn push_text_at(&mut self, ch: char, location: ParseLocation) {
        if self.text.is_empty() {
            self.text_start = location;
        }
        self.text.push(ch);
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let raw = mem::take(&mut self.text);
        let value = decode_entities(&raw).into_owned();
        self.tokens.push(Token::Text { value, location: self.text_start });
    }

    fn take_literal(&mut self) -> Option<Part> {
        if self.literal.is_empty() {
            None
        } else {
            Some(Part::Literal(mem::take(&mut self.literal)))
        }
    }

    fn flush_literal_into_tag_name(&mut self) {
        if let Some(part) = self.take_literal() {
            self.tag_name.push(part);
        }
    }

    fn flush_literal_into_attr_name(&mut self) {
        if let Some(part) = self.take_literal() {
            self.attr_name.push(part);
        }
    }

    fn flush_literal_into_attr_value(&mut self) {
        if self.literal.is_empty() {
            return;
        }
        let raw = mem::take(&mut self.literal);
        let decoded = decode_entities(&raw).into_owned();
        self.attr_value.get_or_insert_with(Parts::new).push(Part::Literal(decoded));
    }

    fn start_attr(&mut self) {
        self.attr_start = self.location;
        self.attr_name.clear();
        self.attr_value = None;
        self.state = LexState::InAttrName;
    }

    fn emit_tag_open_start(&mut self) {
        let name = mem::take(&mut self.tag_name);
        self.tokens.push(Token::TagOpenStart { name, location: self.tag_start });
    }

    fn emit_attr(&mut self) {
        let name = mem::take(&mut self.attr_name);
        let mut value = self.attr_value.take();
        if let Some(parts) = value.as_mut() {
            if let [Part::Slot(slot)] = parts.as_mut_slice() {
                slot.kind = SlotKind::WholeAttrValue;
            }
        }
        self.tokens.push(Token::Attr { name, value, location: self.attr_start });
    }

    fn emit_tag_open_end(&mut self, self_closing: bool) {
        self.tokens.push(Token::TagOpenEnd { self_closing, location: self.location });
        self.state = LexState::Outside;
    }

    fn emit_tag_close(&mut self) {
        let name = mem::take(&mut self.tag_name);
        self.tokens.push(Token::TagClose { name, location: self.tag_start });
        self.state = LexState::Outside;
    }

    fn error(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(self.source, self.location, msg)
    }
}
