//! chatmark CLI - format a chat message as safe HTML
//!
//! Reads raw message text from a file argument or stdin, escapes it, and
//! prints the rendered HTML.

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    // render() expects escaped text; the CLI is the caller here.
    let escaped = chatmark::escape_text(&input);
    let html = chatmark::render(&escaped);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
