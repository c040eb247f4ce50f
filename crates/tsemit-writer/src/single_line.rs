//! Writer that flattens output onto a single line.
//!
//! Used for hover and tooltip text. There is no line or indentation state:
//! a line break becomes a single space and every write appends verbatim.
//! Consecutive unforced line breaks collapse into one space, mirroring how
//! `TextWriter::write_line` is skipped at the start of a line.
//! Instances are cheap; create one per rendering instead of sharing.

use std::fmt;

use tsemit_common::is_white_space_like;

use crate::EmitTextWriter;

#[derive(Debug, Clone, Default)]
pub struct SingleLineWriter {
    output: String,
    last_written_start: usize,
    /// The last write was a line-break space.
    after_line_break: bool,
}

impl SingleLineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_written(&self) -> &str {
        &self.output[self.last_written_start..]
    }

    pub fn into_text(self) -> String {
        self.output
    }

    fn write_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.last_written_start = self.output.len();
        self.output.push_str(text);
        self.after_line_break = false;
    }

    fn write_line_raw(&mut self) {
        self.write_text(" ");
        self.after_line_break = true;
    }
}

impl EmitTextWriter for SingleLineWriter {
    fn write(&mut self, text: &str) {
        self.write_text(text);
    }

    fn write_comment(&mut self, text: &str) {
        self.write_text(text);
    }

    fn raw_write(&mut self, text: &str) {
        self.write_text(text);
    }

    fn write_line(&mut self) {
        if !self.after_line_break {
            self.write_line_raw();
        }
    }

    fn write_line_force(&mut self, force: bool) {
        if !self.after_line_break || force {
            self.write_line_raw();
        }
    }

    fn increase_indent(&mut self) {}

    fn decrease_indent(&mut self) {}

    fn get_text(&self) -> &str {
        &self.output
    }

    fn get_text_pos(&self) -> usize {
        self.output.len()
    }

    fn get_line(&self) -> usize {
        0
    }

    fn get_indent(&self) -> usize {
        0
    }

    fn get_column(&self) -> usize {
        0
    }

    fn is_at_start_of_line(&self) -> bool {
        false
    }

    fn has_trailing_comment(&self) -> bool {
        false
    }

    fn has_trailing_whitespace(&self) -> bool {
        self.output.chars().next_back().is_some_and(is_white_space_like)
    }

    fn clear(&mut self) {
        self.output.clear();
        self.last_written_start = 0;
        self.after_line_break = false;
    }
}

impl fmt::Display for SingleLineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
