//! Emphasis resolution: a single left-to-right scan that turns `*`/`_`
//! marker runs into nested `<strong>`/`<em>` tags.
//!
//! The scan keeps an explicit stack of open formats, local to the call.
//! At each marker run it first tries to close the most recently opened
//! compatible format, then to open a new one, and otherwise passes the
//! marker through literally. Anything still open at end of input is closed
//! in reverse-open order, so the output never contains a dangling tag.
//!
//! The rules are asymmetric on purpose: opening an underscore italic
//! requires a word boundary on both sides of the run, while closing only
//! looks at the byte before the run. Asterisks may open and close anywhere,
//! except that a lone `*` with whitespace on both sides is always literal.

use smallvec::SmallVec;

use crate::inline::marks::MarkerRun;
use crate::render::HtmlWriter;

/// Kind of an open inline format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Bold,
    Italic,
}

/// An entry on the open-format stack: what was opened and by which marker.
#[derive(Debug, Clone, Copy)]
struct OpenFormat {
    kind: Format,
    marker: u8,
}

/// Bold and italic are independent toggles per marker char, so the stack
/// stays tiny; four slots cover every reachable state without spilling.
type FormatStack = SmallVec<[OpenFormat; 4]>;

/// Resolve emphasis markers in `text`, returning HTML.
///
/// `text` is working text from the block extractor: already HTML-escaped,
/// with code spans replaced by opaque placeholder tokens.
pub fn render_emphasis(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = HtmlWriter::with_capacity_for(text.len());
    let mut stack = FormatStack::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' && bytes[i] != b'_' {
            // Bulk-copy up to the next marker byte.
            let next = memchr::memchr2(b'*', b'_', &bytes[i..]).map_or(bytes.len(), |p| i + p);
            out.push_str(&text[i..next]);
            i = next;
            continue;
        }

        let run = MarkerRun::scan(bytes, i);

        // A lone asterisk floating in whitespace is plain text, never a
        // delimiter of any kind.
        if run.count == 1 && run.marker == b'*' && run.whitespace_delimited(bytes) {
            out.push_char('*');
            i += 1;
            continue;
        }

        if let Some(consumed) = try_close(&mut stack, &run, bytes, &mut out) {
            i += consumed;
            continue;
        }

        i += open_or_literal(&mut stack, &run, bytes, &mut out);
    }

    // Auto-close whatever is still open, innermost first.
    while let Some(open) = stack.pop() {
        match open.kind {
            Format::Bold => out.strong_end(),
            Format::Italic => out.em_end(),
        }
    }

    out.into_string()
}

/// Try to close an open format with this run, scanning the stack from the
/// most recently opened entry down. Entries that cannot close with this
/// run are skipped, so a single marker can still reach an italic sitting
/// below a bold of the same marker char.
///
/// Returns the number of marker bytes consumed: always 2 for bold and 1
/// for italic, even when the run is longer; the remainder of the run is
/// reconsidered on the next loop iteration.
fn try_close(
    stack: &mut FormatStack,
    run: &MarkerRun,
    bytes: &[u8],
    out: &mut HtmlWriter,
) -> Option<usize> {
    for idx in (0..stack.len()).rev() {
        let open = stack[idx];
        if open.marker != run.marker {
            continue;
        }
        match open.kind {
            Format::Bold if run.count >= 2 => {
                out.strong_end();
                stack.remove(idx);
                return Some(2);
            }
            Format::Italic => {
                // Closing is laxer than opening: asterisks close anywhere,
                // underscores close whenever the byte before the run is a
                // non-word byte. The inside of the run is not checked.
                if run.marker == b'*' || run.start_boundary(bytes) {
                    out.em_end();
                    stack.remove(idx);
                    return Some(1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Open a new format from this run, or emit the first marker literally.
/// Returns the number of marker bytes consumed.
fn open_or_literal(
    stack: &mut FormatStack,
    run: &MarkerRun,
    bytes: &[u8],
    out: &mut HtmlWriter,
) -> usize {
    if run.count >= 3 {
        // Triple marker opens both at once; italic is innermost.
        out.strong_start();
        out.em_start();
        stack.push(OpenFormat {
            kind: Format::Bold,
            marker: run.marker,
        });
        stack.push(OpenFormat {
            kind: Format::Italic,
            marker: run.marker,
        });
        3
    } else if run.count >= 2 {
        out.strong_start();
        stack.push(OpenFormat {
            kind: Format::Bold,
            marker: run.marker,
        });
        2
    } else if run.marker == b'*' || (run.start_boundary(bytes) && run.end_boundary(bytes)) {
        // Underscores only open italics at a word boundary on both sides,
        // so snake_case identifiers pass through untouched.
        out.em_start();
        stack.push(OpenFormat {
            kind: Format::Italic,
            marker: run.marker,
        });
        1
    } else {
        out.push_char(run.marker as char);
        1
    }
}
