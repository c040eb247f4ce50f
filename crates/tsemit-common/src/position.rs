//! Line starts and line/character positions.
//!
//! Writers track columns in bytes of their own buffer; `LineMap` converts
//! finished text offsets to LSP-style positions.

use crate::char_codes::is_line_break;

/// A position in emitted text (0-indexed line and character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units for LSP compatibility)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Compute the byte offset of every line start in `text`.
///
/// The result always begins with `0`. `\r\n` is a single break; a lone
/// `\r`, `\n`, U+2028 or U+2029 each start a new line.
pub fn compute_line_starts(text: &str) -> Vec<u32> {
    let bytes = text.as_bytes();
    let mut result = Vec::new();
    let mut line_start = 0usize;
    let mut pos = 0usize;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii() {
            pos += 1;
            match b {
                b'\r' => {
                    if bytes.get(pos) == Some(&b'\n') {
                        pos += 1;
                    }
                    result.push(line_start as u32);
                    line_start = pos;
                }
                b'\n' => {
                    result.push(line_start as u32);
                    line_start = pos;
                }
                _ => {}
            }
        } else {
            // pos always sits on a char boundary here
            let Some(ch) = text[pos..].chars().next() else {
                break;
            };
            pos += ch.len_utf8();
            if is_line_break(ch) {
                result.push(line_start as u32);
                line_start = pos;
            }
        }
    }

    result.push(line_start as u32);
    result
}

/// Whether `text` contains any line break recognized by `compute_line_starts`.
///
/// U+2028 and U+2029 both encode with a leading `0xE2` byte, so a three-way
/// byte search rules out the common no-newline case without decoding.
pub fn contains_line_break(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut offset = 0;
    while let Some(found) = memchr::memchr3(b'\n', b'\r', 0xE2, &bytes[offset..]) {
        let at = offset + found;
        if bytes[at] != 0xE2 {
            return true;
        }
        if text[at..].starts_with(['\u{2028}', '\u{2029}']) {
            return true;
        }
        offset = at + 1;
    }
    false
}

/// Line starts of a finished text, for mapping byte offsets to positions.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(text: &str) -> Self {
        LineMap {
            line_starts: compute_line_starts(text),
        }
    }

    /// Position of byte `offset` in `text`, with the character counted in
    /// UTF-16 units. Offsets past the end clamp to the end; values that do
    /// not fit a `u32` saturate.
    pub fn offset_to_position(&self, offset: usize, text: &str) -> Position {
        let offset = offset.min(text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start as usize <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).map_or(0, |&start| start as usize);
        let character = text
            .get(line_start..offset)
            .map_or(0, |slice| slice.encode_utf16().count());

        Position {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            character: u32::try_from(character).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
