//! Build errors

use crate::parse_util::ParseError;
use crate::template::tokens::SlotKind;
use thiserror::Error;

/// Everything that can abort a build. No partial tree is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Template parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Unsupported interpolation in {kind} position: {found}")]
    UnsupportedInterpolation { kind: SlotKind, found: &'static str },
}

impl BuildError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, BuildError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
