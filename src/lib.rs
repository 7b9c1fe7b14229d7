//! chatmark: restricted Markdown to safe HTML for chat messages
//!
//! Converts the small markdown dialect used in chat messages (headings,
//! fenced and inline code, `*`/`_` emphasis, hard breaks, paragraphs)
//! into HTML limited to a fixed tag vocabulary: `<h1>`..`<h6>`,
//! `<strong>`, `<em>`, `<pre><code>`, `<code>`, `<p>`, and `<br>`.
//!
//! # Input contract
//! [`render`](render()) consumes text that the caller has already
//! HTML-escaped (`&`, `<`, `>`, `"`, `'` entity-encoded) and never
//! escapes on its own; every `<` in the output is introduced by the
//! formatter itself. The [`escape`] module has helpers for callers.
//!
//! # Design
//! - Explicit ordered pipeline: block extraction, inline emphasis,
//!   placeholder restoration, block-level finish
//! - No regex: byte-level scanning over the working text
//! - No failure modes: every input maps to a well-formed output string
//!   with balanced tags; malformed markers degrade to literal text or
//!   auto-closed tags, never to an error
//! - No shared state: each call builds and drops its own format stack
//!   and placeholder table, so calls are freely concurrent

pub mod block;
pub mod escape;
pub mod inline;
pub mod placeholder;
pub mod render;

// Re-export the primary entry points
pub use escape::{escape_text, escape_text_into};
pub use placeholder::PlaceholderStore;
pub use render::HtmlWriter;

/// Render an escaped chat message to HTML.
///
/// # Example
/// ```
/// let html = chatmark::render("**bold *italic* text**");
/// assert_eq!(html, "<strong>bold <em>italic</em> text</strong>");
/// ```
pub fn render(input: &str) -> String {
    let mut store = PlaceholderStore::new();
    let working = block::extract(input, &mut store);
    let emphasized = inline::render_emphasis(&working);
    let restored = store.restore(&emphasized);
    render::finish(&restored)
}

/// Render an escaped chat message into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn render_into(input: &str, out: &mut String) {
    out.clear();
    out.push_str(&render(input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_empty_input_minimal_wrap() {
        assert_eq!(render(""), "<p></p>");
    }

    #[test]
    fn test_literal_asterisks() {
        let html = render("* not emphasis *");
        assert_eq!(html, "<p>* not emphasis *</p>");
    }

    #[test]
    fn test_intraword_emphasis() {
        assert_eq!(render("un*believ*able"), "<p>un<em>believ</em>able</p>");
    }

    #[test]
    fn test_snake_case_untouched() {
        assert_eq!(render("snake_case_word"), "<p>snake_case_word</p>");
    }

    #[test]
    fn test_triple_marker() {
        assert_eq!(
            render("***bold and italic***"),
            "<strong><em>bold and italic</em></strong>"
        );
    }

    #[test]
    fn test_mixed_nesting() {
        assert_eq!(
            render("**bold *italic* text**"),
            "<strong>bold <em>italic</em> text</strong>"
        );
    }

    #[test]
    fn test_unclosed_bold_auto_closes() {
        assert_eq!(render("**unclosed bold"), "<strong>unclosed bold</strong>");
    }

    #[test]
    fn test_inline_code_immune_to_emphasis() {
        assert_eq!(render("`*not italic*`"), "<code>*not italic*</code>");
    }

    #[test]
    fn test_fenced_code_immune_to_emphasis() {
        let html = render("```\n*verbatim* and _markers_\n```");
        assert_eq!(
            html,
            "<pre><code>\n*verbatim* and _markers_\n</code></pre>"
        );
    }

    #[test]
    fn test_heading_then_emphasis() {
        let html = render("# Title with *flair*");
        assert_eq!(html, "<h1>Title with <em>flair</em></h1>");
    }

    #[test]
    fn test_paragraph_split_and_wrap() {
        // The leading wrap exists exactly so the "</p><p>" boundary
        // rewrite produces balanced paragraphs.
        assert_eq!(render("first\n\nsecond"), "<p>first</p><p>second</p>");
    }

    #[test]
    fn test_hard_line_break() {
        assert_eq!(render("one  \ntwo"), "<p>one<br>\ntwo</p>");
    }

    #[test]
    fn test_escaped_input_passes_through() {
        let html = render("&lt;div&gt; &amp; &quot;quoted&quot;");
        assert_eq!(html, "<p>&lt;div&gt; &amp; &quot;quoted&quot;</p>");
    }

    #[test]
    fn test_emphasis_across_escaped_entities() {
        // Entity text ends in `;`, a non-word byte, so underscores around
        // it sit at boundaries.
        assert_eq!(render("_&amp;_"), "<em>&amp;</em>");
    }

    #[test]
    fn test_code_span_with_markers_and_emphasis_outside() {
        assert_eq!(
            render("run `cargo *test*` **now**"),
            "<p>run <code>cargo *test*</code> <strong>now</strong></p>"
        );
    }

    #[test]
    fn test_message_with_everything() {
        let input = "# Notes\nuse `x_y` and **watch**:\n```\na * b\n```";
        let html = render(input);
        assert_eq!(
            html,
            "<h1>Notes</h1>\nuse <code>x_y</code> and <strong>watch</strong>:\n<pre><code>\na * b\n</code></pre>"
        );
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let mut buf = String::from("stale");
        render_into("fresh", &mut buf);
        assert_eq!(buf, "<p>fresh</p>");
    }
}
