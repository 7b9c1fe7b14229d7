//! Block extractor: heading conversion and code extraction.
//!
//! Runs before the inline emphasis engine as an ordered pipeline of three
//! stages over the working text. The order is a contract between stages:
//! headings are converted on the raw lines first, fenced code is extracted
//! before inline code (otherwise a fence's internal backticks would be
//! misread as inline-code delimiters), and inline code only sees text left
//! over after the fences became opaque tokens.

use memchr::memchr;
use memchr::memmem;

use crate::placeholder::PlaceholderStore;
use crate::render::HtmlWriter;

/// Fence delimiter for multi-line code blocks.
const FENCE: &str = "```";

/// Run all extraction stages, recording code spans in `store`.
///
/// Returns the working text: headings already converted to tags, code
/// content replaced by placeholder tokens, everything else untouched.
pub fn extract(input: &str, store: &mut PlaceholderStore) -> String {
    let headed = convert_headings(input);
    let fenced = extract_fenced_code(&headed, store);
    extract_inline_code(&fenced, store)
}

/// Convert whole heading lines to `<hN>…</hN>`.
///
/// A heading line is 1-6 `#` followed by at least one space or tab and
/// some content. The full hash run is measured first, so six hashes are
/// an `h6` rather than an `h1`, and seven or more stay literal.
fn convert_headings(input: &str) -> String {
    let mut out = HtmlWriter::with_capacity_for(input.len());
    for (idx, line) in input.split('\n').enumerate() {
        if idx > 0 {
            out.push_char('\n');
        }
        match heading_line(line) {
            Some((level, content)) => {
                out.heading_start(level);
                out.push_str(content);
                out.heading_end(level);
            }
            None => out.push_str(line),
        }
    }
    out.into_string()
}

/// Classify a line as a heading, returning its level and content.
fn heading_line(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    let content = rest.trim_start_matches([' ', '\t']);
    if content.len() == rest.len() || content.is_empty() {
        // No whitespace after the hashes, or nothing but whitespace.
        return None;
    }
    Some((hashes as u8, content))
}

/// Replace every fenced code block with a placeholder token.
///
/// Matching is earliest-first and shortest-match: the first closing
/// triple backtick after an opening one ends the block, so fences do not
/// nest. An opening fence with no closer stays literal.
fn extract_fenced_code(input: &str, store: &mut PlaceholderStore) -> String {
    let finder = memmem::Finder::new(FENCE);
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(off) = finder.find(&bytes[pos..]) {
        let open = pos + off;
        let inner_start = open + FENCE.len();
        let Some(close_off) = finder.find(&bytes[inner_start..]) else {
            break;
        };
        let close = inner_start + close_off;

        out.push_str(&input[pos..open]);
        let mut html = HtmlWriter::with_capacity_for(close - inner_start + 26);
        html.code_block(&input[inner_start..close]);
        out.push_str(&store.insert(html.into_string()));
        pos = close + FENCE.len();
    }

    out.push_str(&input[pos..]);
    out
}

/// Replace every inline code span with a placeholder token.
///
/// A span is a single backtick, at least one non-backtick byte, and a
/// closing backtick; it may cross newlines. Backticks that do not form a
/// span stay literal.
fn extract_inline_code(input: &str, store: &mut PlaceholderStore) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(off) = memchr(b'`', &bytes[pos..]) {
        let open = pos + off;
        match memchr(b'`', &bytes[open + 1..]) {
            Some(close_off) if close_off > 0 => {
                let close = open + 1 + close_off;
                out.push_str(&input[pos..open]);
                let mut html = HtmlWriter::with_capacity_for(close - open + 12);
                html.code_span(&input[open + 1..close]);
                out.push_str(&store.insert(html.into_string()));
                pos = close + 1;
            }
            _ => {
                // Adjacent backticks or no closer left.
                out.push_str(&input[pos..=open]);
                pos = open + 1;
            }
        }
    }

    out.push_str(&input[pos..]);
    out
}
