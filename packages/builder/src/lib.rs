#![deny(clippy::all)]

//! Tagged HTML builder
//!
//! Builds element/text trees from HTML templates split into literal segments
//! and interpolated values, the decomposition of a tagged template call.
//!
//! ```ignore
//! let built = tagged_html::html!(["<div class=", ">", "</div>"], "note", "hello")?;
//! assert_eq!(built.to_html(), "<div class=\"note\">hello</div>");
//! ```

pub mod chars;
mod config;
mod error;
pub mod parse_util;
pub mod template;
mod value;

pub use config::BuildOptions;
pub use error::{BuildError, Result};
pub use parse_util::{ParseError, ParseLocation, TemplateSource};
pub use template::{dump, dump_node, tokenize, Built, Element, Fragment, Node, SlotKind, FRAGMENT_MARKER};
pub use value::{format_number, Value};

use template::tree_builder::TreeBuilder;

/// Entry point holding the options shared by every build
#[derive(Debug, Clone, Default)]
pub struct HtmlBuilder {
    options: BuildOptions,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a tree from `strings.len()` literal segments and one value per
    /// gap between them
    pub fn build<S: AsRef<str>>(&self, strings: &[S], values: Vec<Value>) -> Result<Built> {
        let source = if self.options.normalize_line_endings {
            TemplateSource::normalized(strings)
        } else {
            TemplateSource::new(strings)
        };

        if values.len() != source.slot_count() {
            let last = source.segments.len().saturating_sub(1);
            let offset = source.segments.last().map_or(0, String::len);
            let location = source.location(last, offset);
            return Err(ParseError::new(
                &source,
                location,
                format!(
                    "Expected {} interpolated values, got {}",
                    source.slot_count(),
                    values.len()
                ),
            )
            .into());
        }

        let tokens = tokenize(&source)?;
        let roots = TreeBuilder::new(&source, &self.options, values).build(tokens)?;
        let built = Built::from_roots(roots);
        log::debug!(
            "built template of {} segments into {}",
            source.segments.len(),
            match &built {
                Built::Text(_) => "text".to_string(),
                Built::Element(element) => format!("<{}>", element.name),
                Built::Fragment(fragment) => format!("fragment of {} nodes", fragment.len()),
            }
        );
        Ok(built)
    }
}

/// Build with default options
pub fn html<S: AsRef<str>>(strings: &[S], values: Vec<Value>) -> Result<Built> {
    HtmlBuilder::new().build(strings, values)
}

/// `html!(["<b>", "</b>"], value)` converts each value with `Value::from` and
/// calls [`html`]
#[macro_export]
macro_rules! html {
    ([$($segment:expr),* $(,)?] $(, $value:expr)* $(,)?) => {
        $crate::html(
            &[$($segment),*] as &[&str],
            vec![$($crate::Value::from($value)),*],
        )
    };
}
