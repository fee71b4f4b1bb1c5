//! Line splitting for included sources.
//!
//! Local files and remote bodies split differently at the tail: a file's
//! trailing line terminator does not produce an empty final line, while a
//! remote body is split on `\n` with every trailing empty segment
//! dropped. The two helpers keep those semantics separate.

use std::fs;
use std::io;
use std::path::Path;

/// Splits a fetched body on `\n`, dropping trailing empty segments.
pub(crate) fn split_body(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = body.split('\n').map(str::to_owned).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Reads a file as UTF-8 and splits it into lines.
///
/// Line terminators (`\n` or `\r\n`) are consumed; a trailing terminator
/// does not produce an empty final line.
pub(crate) fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}
