//! Property tests for output well-formedness.

use proptest::prelude::*;

/// Tag names the formatter is allowed to emit.
const TAGS: [&str; 12] = [
    "p", "br", "em", "strong", "code", "pre", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Every `<` in `html` must begin an opening or closing tag from the
/// fixed vocabulary.
fn angle_brackets_only_open_known_tags(html: &str) -> bool {
    html.bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'<')
        .all(|(i, _)| {
            let rest = &html[i + 1..];
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            TAGS.iter()
                .any(|tag| rest.strip_prefix(tag).is_some_and(|r| r.starts_with('>')))
        })
}

proptest! {
    #[test]
    fn emphasis_tags_balanced(input in "[a-zA-Z0-9 *_`#\n]{0,80}") {
        let html = chatmark::render(&input);
        prop_assert_eq!(
            html.matches("<strong>").count(),
            html.matches("</strong>").count(),
            "input {:?} -> {}", input, html
        );
        prop_assert_eq!(
            html.matches("<em>").count(),
            html.matches("</em>").count(),
            "input {:?} -> {}", input, html
        );
    }

    #[test]
    fn output_uses_only_known_tags(input in "[a-zA-Z0-9 .,!?*_`#\n-]{0,80}") {
        // Escaped input contains no markup bytes, so any `<` in the
        // output was introduced by the formatter itself.
        let html = chatmark::render(&input);
        prop_assert!(
            angle_brackets_only_open_known_tags(&html),
            "input {:?} -> {}", input, html
        );
    }

    #[test]
    fn plain_words_pass_through(input in "[a-zA-Z0-9 .,!?-]{0,60}") {
        let html = chatmark::render(&input);
        prop_assert_eq!(html, format!("<p>{input}</p>"));
    }

    #[test]
    fn never_panics_on_escaped_text(raw in "\\PC{0,120}") {
        // Arbitrary printable input, run through the caller-side escape
        // first to satisfy the input contract.
        let escaped = chatmark::escape_text(&raw);
        let _ = chatmark::render(&escaped);
    }
}
