//! Marker run scanning and boundary classification.
//!
//! A marker run is a maximal sequence of identical `*` or `_` bytes.
//! Boundary checks look at the single byte before the run and the single
//! byte after it; they decide where underscores may open or close emphasis
//! and when a lone asterisk stays literal.

/// A maximal run of identical emphasis marker bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun {
    /// The marker byte, `b'*'` or `b'_'`.
    pub marker: u8,
    /// Number of marker bytes in the run (>= 1).
    pub count: usize,
    /// Byte offset of the first marker.
    pub start: usize,
    /// Byte offset one past the last marker.
    pub end: usize,
}

impl MarkerRun {
    /// Scan the run starting at `start`. The byte at `start` must be a
    /// marker byte.
    #[inline]
    pub fn scan(bytes: &[u8], start: usize) -> Self {
        let marker = bytes[start];
        debug_assert!(marker == b'*' || marker == b'_');
        let mut end = start + 1;
        while end < bytes.len() && bytes[end] == marker {
            end += 1;
        }
        Self {
            marker,
            count: end - start,
            start,
            end,
        }
    }

    /// True if the run sits at the start of the text or is preceded by a
    /// non-word byte.
    #[inline]
    pub fn start_boundary(&self, bytes: &[u8]) -> bool {
        self.start == 0 || !is_word_byte(bytes[self.start - 1])
    }

    /// True if the run sits at the end of the text or is followed by a
    /// non-word byte.
    #[inline]
    pub fn end_boundary(&self, bytes: &[u8]) -> bool {
        self.end >= bytes.len() || !is_word_byte(bytes[self.end])
    }

    /// True if the run has whitespace (or a text edge) on both sides.
    /// A lone `*` in that position is never an emphasis delimiter.
    #[inline]
    pub fn whitespace_delimited(&self, bytes: &[u8]) -> bool {
        let before = self.start == 0 || bytes[self.start - 1].is_ascii_whitespace();
        let after = self.end >= bytes.len() || bytes[self.end].is_ascii_whitespace();
        before && after
    }
}

/// Word bytes in the conventional regex `\w` sense: ASCII letter, digit,
/// or underscore. Non-ASCII bytes count as non-word, so multibyte UTF-8
/// sequences always form boundaries.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
