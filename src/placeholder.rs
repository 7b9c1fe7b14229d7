//! Placeholder table for extracted code content.
//!
//! Fenced code blocks and inline code spans are lifted out of the working
//! text before emphasis parsing and stood in for by opaque tokens. Tokens
//! are NUL-delimited counters (`\0{n}\0`): the emphasis engine and the
//! escaping contract can never produce a NUL byte, so tokens survive the
//! inline pass byte-for-byte and cannot collide with user text markup.
//!
//! Restoration is a single pass over the final text; each token is
//! substituted exactly once.

use memchr::memchr;
use rustc_hash::FxHashMap;

/// Sentinel byte delimiting placeholder tokens.
pub const SENTINEL: u8 = 0;

/// Arena of extracted HTML spans, keyed by their placeholder token.
#[derive(Debug, Default)]
pub struct PlaceholderStore {
    slots: FxHashMap<String, String>,
    next_id: u32,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `html` and mint a fresh token to stand in for it.
    pub fn insert(&mut self, html: String) -> String {
        let token = format!("\u{0}{}\u{0}", self.next_id);
        self.next_id += 1;
        self.slots.insert(token.clone(), html);
        token
    }

    /// Number of extracted spans.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Substitute every token in `text` back to its recorded HTML.
    ///
    /// Stray sentinel bytes that do not form a known token are kept as-is;
    /// scanning resumes right after them, so real tokens further along are
    /// still found.
    pub fn restore(&self, text: &str) -> String {
        if self.slots.is_empty() {
            return text.to_owned();
        }

        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len() + 64);
        let mut pos = 0;

        while let Some(off) = memchr(SENTINEL, &bytes[pos..]) {
            let start = pos + off;
            out.push_str(&text[pos..start]);

            let replaced = memchr(SENTINEL, &bytes[start + 1..]).and_then(|end_off| {
                let end = start + 1 + end_off;
                self.slots.get(&text[start..=end]).map(|html| (end, html))
            });

            match replaced {
                Some((end, html)) => {
                    out.push_str(html);
                    pos = end + 1;
                }
                None => {
                    out.push('\u{0}');
                    pos = start + 1;
                }
            }
        }

        out.push_str(&text[pos..]);
        out
    }
}
