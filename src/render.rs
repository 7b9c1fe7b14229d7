//! HTML output writer and the block-level finishing pass.
//!
//! The writer only knows the restricted tag vocabulary of the chat
//! formatter: `h1`..`h6`, `p`, `br`, `strong`, `em`, `code`, and
//! `pre><code`. Everything else that reaches it is expected to be
//! already-escaped text.

/// HTML output writer with a pre-sized, reusable buffer.
///
/// # Example
/// ```
/// use chatmark::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.strong_start();
/// writer.push_str("loud");
/// writer.strong_end();
/// assert_eq!(writer.into_string(), "<strong>loud</strong>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(256),
        }
    }

    /// Create with capacity sized for an input length.
    ///
    /// Typical output is ~1.25x input size; reserve a little extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a string slice verbatim.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single character verbatim.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Output so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Tag vocabulary ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write emphasis start: `<em>`
    #[inline]
    pub fn em_start(&mut self) {
        self.out.push_str("<em>");
    }

    /// Write emphasis end: `</em>`
    #[inline]
    pub fn em_end(&mut self) {
        self.out.push_str("</em>");
    }

    /// Write strong start: `<strong>`
    #[inline]
    pub fn strong_start(&mut self) {
        self.out.push_str("<strong>");
    }

    /// Write strong end: `</strong>`
    #[inline]
    pub fn strong_end(&mut self) {
        self.out.push_str("</strong>");
    }

    /// Write an inline code span with verbatim content.
    #[inline]
    pub fn code_span(&mut self, content: &str) {
        self.out.push_str("<code>");
        self.out.push_str(content);
        self.out.push_str("</code>");
    }

    /// Write a code block with verbatim content.
    #[inline]
    pub fn code_block(&mut self, content: &str) {
        self.out.push_str("<pre><code>");
        self.out.push_str(content);
        self.out.push_str("</code></pre>");
    }
}

/// Block-level finishing pass over restored HTML.
///
/// In order: a line ending in two spaces becomes a hard break, a blank
/// line becomes a paragraph boundary, and the whole result is wrapped in
/// `<p>…</p>` unless it already starts with markup. The rewrites run
/// after placeholder restoration and therefore also touch restored code
/// content.
pub fn finish(html: &str) -> String {
    let html = html.replace("  \n", "<br>\n");
    let html = html.replace("\n\n", "</p><p>");
    if html.starts_with('<') {
        html
    } else {
        let mut wrapped = String::with_capacity(html.len() + 7);
        wrapped.push_str("<p>");
        wrapped.push_str(&html);
        wrapped.push_str("</p>");
        wrapped
    }
}
