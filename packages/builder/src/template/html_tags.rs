//! HTML Tag Definitions
//!
//! Only the part of the HTML tag table the builder needs: which elements are
//! void (no content, no end tag).

use once_cell::sync::Lazy;
use std::collections::HashSet;

static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ]
    .into_iter()
    .collect()
});

/// Check if `tag_name` names a void element (ASCII case-insensitive)
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(tag_name.to_ascii_lowercase().as_str())
}
