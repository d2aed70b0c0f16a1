#![allow(dead_code)]

//! Template Test Utilities
//!
//! Helpers shared by the template integration tests

use serde_json::Value as JsonValue;
use tagged_html::template::tokens::{Part, SlotKind, Token};
use tagged_html::{dump, html, tokenize, BuildError, Built, TemplateSource, Value};

/// Build and dump, panicking on build errors
pub fn build_dump(strings: &[&str], values: Vec<Value>) -> JsonValue {
    match html(strings, values) {
        Ok(built) => dump(&built),
        Err(error) => panic!("build of {:?} failed: {}", strings, error),
    }
}

pub fn build(strings: &[&str], values: Vec<Value>) -> Built {
    match html(strings, values) {
        Ok(built) => built,
        Err(error) => panic!("build of {:?} failed: {}", strings, error),
    }
}

pub fn build_error(strings: &[&str], values: Vec<Value>) -> BuildError {
    match html(strings, values) {
        Ok(built) => panic!("build of {:?} should fail, got {:?}", strings, built),
        Err(error) => error,
    }
}

/// Slot kinds in the order the lexer classified them
pub fn slot_kinds(strings: &[&str]) -> Vec<SlotKind> {
    let tokens = tokenize(&TemplateSource::new(strings))
        .unwrap_or_else(|error| panic!("tokenize of {:?} failed: {}", strings, error));
    let mut slots: Vec<_> = tokens.iter().flat_map(Token::slots).collect();
    slots.sort_by_key(|slot| slot.index);
    slots.into_iter().map(|slot| slot.kind).collect()
}

/// Render a part list as `lit` / `${n}` pieces for compact assertions
pub fn humanize_parts(parts: &[Part]) -> String {
    parts
        .iter()
        .map(|part| match part {
            Part::Literal(text) => text.clone(),
            Part::Slot(slot) => format!("${{{}}}", slot.index),
        })
        .collect()
}
