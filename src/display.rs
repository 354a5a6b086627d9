//! Art layout: pads every art line to the block's widest line and prints a
//! label/value row beside it.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const PUPPY: &str = concat!(
    "  /^ ^\\    \n",
    " / 0 0 \\   \n",
    " V\\ Y /V   \n",
    "  / - \\    \n",
    " /    |    \n",
    "V__) ||    \n",
);

const RESET: &str = "\x1b[0m";

/// Terminal colors used by the fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    BrightMagenta,
    BrightBlue,
    BoldWhite,
}

impl Color {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::BrightMagenta => "\x1b[0;95m",
            Color::BrightBlue => "\x1b[0;94m",
            Color::BoldWhite => "\x1b[1;37m",
        }
    }

    /// Wrap `text` in this color, resetting afterwards.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.ansi_code(), text, RESET)
    }
}

/// Display width of the widest line.
///
/// A trailing newline does not start an extra (empty) line, and the last line
/// counts even when it is not newline-terminated.
pub fn square_width(art: &str) -> usize {
    art.split_terminator('\n')
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// Cursor at the first line of `art`, `None` for an empty block.
pub fn start_cursor(art: &str) -> Option<usize> {
    (!art.is_empty()).then_some(0)
}

/// Write one art line starting at `cursor`, padded with spaces to `width`.
///
/// Returns the byte offset of the next line, or `None` once the block is
/// exhausted. An exhausted cursor writes `width` spaces so rows past the end
/// of the art stay aligned.
pub fn draw_line<W: Write>(
    out: &mut W,
    art: &str,
    cursor: Option<usize>,
    width: usize,
) -> io::Result<Option<usize>> {
    let Some(start) = cursor.filter(|&pos| pos < art.len()) else {
        write!(out, "{:width$}", "", width = width)?;
        return Ok(None);
    };

    let rest = &art[start..];
    let (line, next) = match rest.find('\n') {
        Some(nl) => (&rest[..nl], Some(start + nl + 1).filter(|&pos| pos < art.len())),
        None => (rest, None),
    };

    let pad = width.saturating_sub(UnicodeWidthStr::width(line));
    write!(out, "{}{:pad$}", line, "", pad = pad)?;
    Ok(next)
}

/// Interleave `art` with `(label, value)` rows, then drain the rest of the
/// art so it is never cut short.
pub fn render<'a, W, I>(out: &mut W, art: &str, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let width = square_width(art);
    let mut cursor = start_cursor(art);

    for (label, value) in rows {
        cursor = draw_line(out, art, cursor, width)?;
        writeln!(out, "{}{}", label, value)?;
    }

    while cursor.is_some() {
        cursor = draw_line(out, art, cursor, width)?;
        writeln!(out)?;
    }

    out.flush()
}
