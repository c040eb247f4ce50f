//! Indentation-aware text writer.
//!
//! Output accumulates in a single `String`. Line bookkeeping is updated
//! incrementally: each write scans only the fragment it appends, never the
//! whole buffer.

use std::fmt;

use tracing::debug;
use tsemit_common::{compute_line_starts, contains_line_break, is_white_space_like};

use crate::{EmitTextWriter, WriterOptions};

#[derive(Debug, Clone)]
pub struct TextWriter {
    options: WriterOptions,
    output: String,
    /// Start of the most recent fragment. Every write appends its fragment
    /// last, so the fragment is always `output[last_written_start..]`.
    last_written_start: usize,
    indent: usize,
    line_start: bool,
    line_count: usize,
    /// Byte offset in `output` where the current line begins.
    line_pos: usize,
    has_trailing_comment: bool,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::with_options(WriterOptions::default())
    }
}

impl TextWriter {
    pub fn new(new_line: impl Into<String>) -> Self {
        Self::with_options(WriterOptions::new(new_line))
    }

    pub fn with_options(options: WriterOptions) -> Self {
        TextWriter {
            options,
            output: String::new(),
            last_written_start: 0,
            indent: 0,
            line_start: true,
            line_count: 0,
            line_pos: 0,
            has_trailing_comment: false,
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn new_line(&self) -> &str {
        &self.options.new_line
    }

    /// The fragment appended by the most recent non-empty write.
    pub fn last_written(&self) -> &str {
        &self.output[self.last_written_start..]
    }

    pub fn into_text(self) -> String {
        self.output
    }

    fn push_fragment(&mut self, s: &str) {
        self.last_written_start = self.output.len();
        self.output.push_str(s);
    }

    fn update_line_count_and_pos_for(&mut self, s: &str) {
        if !contains_line_break(s) {
            self.line_start = false;
            return;
        }

        let line_starts = compute_line_starts(s);
        match line_starts.as_slice() {
            [_, .., last] => {
                self.line_count += line_starts.len() - 1;
                let cur_len = self.output.len();
                self.line_pos = cur_len - s.len() + *last as usize;
                self.line_start = self.line_pos == cur_len;
            }
            _ => self.line_start = false,
        }
    }

    fn write_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.line_start {
            let width = self.indent * self.options.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.line_start = false;
        }
        self.push_fragment(s);
        self.update_line_count_and_pos_for(s);
    }

    fn write_line_raw(&mut self) {
        self.last_written_start = self.output.len();
        self.output.push_str(&self.options.new_line);
        self.line_count += 1;
        self.line_pos = self.output.len();
        self.line_start = true;
        self.has_trailing_comment = false;
    }
}

impl EmitTextWriter for TextWriter {
    fn write(&mut self, text: &str) {
        if !text.is_empty() {
            self.has_trailing_comment = false;
        }
        self.write_text(text);
    }

    fn write_comment(&mut self, text: &str) {
        if !text.is_empty() {
            self.has_trailing_comment = true;
        }
        self.write_text(text);
    }

    fn raw_write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.push_fragment(text);
        self.update_line_count_and_pos_for(text);
        self.has_trailing_comment = false;
    }

    fn write_line(&mut self) {
        if !self.line_start {
            self.write_line_raw();
        }
    }

    fn write_line_force(&mut self, force: bool) {
        if !self.line_start || force {
            self.write_line_raw();
        }
    }

    fn increase_indent(&mut self) {
        self.indent += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent == 0 {
            debug!(line = self.line_count, "decrease_indent at level 0 ignored");
            return;
        }
        self.indent -= 1;
    }

    fn get_text(&self) -> &str {
        &self.output
    }

    fn get_text_pos(&self) -> usize {
        self.output.len()
    }

    fn get_line(&self) -> usize {
        self.line_count
    }

    fn get_indent(&self) -> usize {
        self.indent
    }

    fn get_column(&self) -> usize {
        if self.line_start {
            return self.indent * self.options.indent_width;
        }
        self.output.len() - self.line_pos
    }

    fn is_at_start_of_line(&self) -> bool {
        self.line_start
    }

    fn has_trailing_comment(&self) -> bool {
        self.has_trailing_comment
    }

    fn has_trailing_whitespace(&self) -> bool {
        if self.output.is_empty() {
            return false;
        }
        self.last_written()
            .chars()
            .next_back()
            .is_some_and(is_white_space_like)
    }

    fn clear(&mut self) {
        let options = std::mem::take(&mut self.options);
        *self = Self::with_options(options);
    }
}

impl fmt::Write for TextWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        EmitTextWriter::write(self, s);
        Ok(())
    }
}

impl fmt::Display for TextWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

#[cfg(test)]
#[path = "tests/text_writer_tests.rs"]
mod tests;
