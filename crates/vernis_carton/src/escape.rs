//! HTML escaping for server rendering.

use std::borrow::Cow;

/// Escape text content (`&`, `<`, `>`).
#[inline]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    htmlize::escape_text(text)
}

/// Escape a double-quoted attribute value (`&`, `<`, `>`, `"`).
#[inline]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    htmlize::escape_attribute(value)
}
