//! Character constants and classification helpers used by the template lexer

// Special characters
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const FF: char = '\x0C';
pub const RETURN: char = '\r';
pub const SPACE: char = ' ';
pub const NBSP: char = '\u{00A0}';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const HASH: char = '#';
pub const AMPERSAND: char = '&';
pub const SQ: char = '\'';
pub const MINUS: char = '-';
pub const SLASH: char = '/';
pub const SEMICOLON: char = ';';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const BT: char = '`';

/// Check if character is HTML whitespace (space, tab, LF, CR, form feed).
///
/// NBSP is not whitespace: `&nbsp;` text survives the top-level whitespace
/// drop.
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == NEWLINE || ch == RETURN || ch == FF
}

/// Check if every character of `s` is HTML whitespace (true for "")
pub fn is_whitespace_only(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// Check if character is a digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if character is ASCII hex digit
pub fn is_ascii_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Check if character is a quote that may delimit an attribute value
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}

/// Check if character ends a tag name
pub fn is_tag_name_end(ch: char) -> bool {
    is_whitespace(ch) || ch == SLASH || ch == GT
}

/// Check if character may never appear inside a tag or attribute name,
/// whether written literally or produced by an interpolation
pub fn is_forbidden_in_name(ch: char) -> bool {
    is_whitespace(ch) || ch == LT || ch == GT || ch == SLASH || ch == EQ || is_quote(ch) || ch == BT
}
