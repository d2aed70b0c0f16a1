//! Character references in literal template text

use crate::chars;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Named references understood in literal text
pub static NAMED_ENTITIES: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("amp", '&');
    map.insert("lt", '<');
    map.insert("gt", '>');
    map.insert("quot", '"');
    map.insert("apos", '\'');
    map.insert("nbsp", '\u{00A0}');
    map.insert("copy", '\u{00A9}');
    map.insert("reg", '\u{00AE}');
    map.insert("times", '\u{00D7}');
    map.insert("laquo", '\u{00AB}');
    map.insert("raquo", '\u{00BB}');
    map.insert("ndash", '\u{2013}');
    map.insert("mdash", '\u{2014}');
    map.insert("hellip", '\u{2026}');
    map
});

/// Decode `&name;`, `&#NN;` and `&#xHH;` references.
///
/// Unknown names and malformed references are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains(chars::AMPERSAND) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(chars::AMPERSAND) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match read_reference(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push(chars::AMPERSAND);
                rest = &rest[chars::AMPERSAND.len_utf8()..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Read one reference at the start of `src` (which begins with `&`).
/// Returns the decoded character and the number of bytes consumed.
fn read_reference(src: &str) -> Option<(char, usize)> {
    let body = &src[1..];
    let end = body.find(chars::SEMICOLON)?;
    let name = &body[..end];
    let consumed = end + 2;

    let decoded = match name.strip_prefix(chars::HASH) {
        Some(numeric) => {
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) if !hex.is_empty() && hex.chars().all(chars::is_ascii_hex_digit) => {
                    u32::from_str_radix(hex, 16).ok()?
                }
                Some(_) => return None,
                None if !numeric.is_empty() && numeric.chars().all(chars::is_digit) => {
                    numeric.parse::<u32>().ok()?
                }
                None => return None,
            };
            if code == 0 {
                char::REPLACEMENT_CHARACTER
            } else {
                char::from_u32(code)?
            }
        }
        None => {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            *NAMED_ENTITIES.get(name)?
        }
    };
    Some((decoded, consumed))
}
