//! HTML escaping helpers for callers.
//!
//! The formatter consumes text that is already HTML-safe: the caller
//! encodes `&`, `<`, `>`, `"`, and `'` before handing a message to
//! [`render`](crate::render()), and the core never escapes (or
//! re-escapes) on its own. These helpers exist so callers like the
//! bundled CLI can satisfy that contract without pulling in their own
//! escaping dependency.

use std::borrow::Cow;

/// Escape a raw message for use as formatter input.
///
/// Encodes `&`, `<`, `>`, `"`, and `'`. Returns the input unchanged (no
/// allocation) when nothing needs escaping.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(input)
}

/// Escape a raw message, appending to an existing buffer.
pub fn escape_text_into<'a>(input: &str, out: &'a mut String) -> &'a str {
    html_escape::encode_quoted_attribute_to_string(input, out)
}
