#![allow(clippy::module_inception)]

use std::{
    fmt::{self, Write},
    rc::Rc,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Name used for sources that were not loaded from a file.
pub const DEFAULT_SOURCE_NAME: &str = "shell";

/// A byte offset into a named source.
///
/// Offsets are `u32`, so sources are limited to 4 GiB; offsets past that
/// saturate at `u32::MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Converts a byte offset into a `Position` offset, saturating at `u32::MAX`.
pub fn offset(at: usize) -> u32 {
    u32::try_from(at).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. Offsets at or past the
/// end of the content resolve to the end of the last line, so diagnostics
/// pointing at end-of-input still have somewhere to land.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), line.trim_end_matches('\n').len()));
        start = end;
        line_number += 1;
    }

    last
}

/// Renders a diagnostic with the offending line and a caret marker.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be =, got INT instead)
/// -> shell
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_error(&mut out, error, source).ok();
    out
}

fn write_error(out: &mut String, error: &Error, source: &str) -> fmt::Result {
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", position.1)?;

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return Ok(());
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    write!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(index, _)| index)
        .unwrap_or(string.len());

    (&string[start..], start)
}
