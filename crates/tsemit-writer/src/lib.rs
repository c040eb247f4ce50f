//! Text writers used by the tsemit printer.
//!
//! A printer walks an emit tree and calls the semantic `write_*` methods of
//! an [`EmitTextWriter`]. Two implementations exist:
//!
//! - [`TextWriter`]: keeps line, column and indentation state and inserts
//!   indentation at the start of each line.
//! - [`SingleLineWriter`]: flattens output onto one line (hover text,
//!   inline diagnostics). Line breaks become single spaces.
//!
//! Callers are written once against the trait and handed whichever writer
//! gives the desired output shape.

use tsemit_common::SymbolId;

pub mod options;
pub use options::WriterOptions;

pub mod text_writer;
pub use text_writer::TextWriter;

pub mod single_line;
pub use single_line::SingleLineWriter;

/// Incremental text emission with position tracking.
///
/// The semantically tagged writes (`write_keyword`, `write_operator`, ...)
/// all funnel into [`write`](EmitTextWriter::write) by default; they exist
/// so a writer can classify output (e.g. for display parts) without the
/// printer caring.
pub trait EmitTextWriter {
    /// Indented write. Empty text is a no-op; otherwise clears the trailing
    /// comment flag.
    fn write(&mut self, text: &str);

    /// Indented write that marks the output as ending in a comment.
    fn write_comment(&mut self, text: &str);

    /// Write text that is already positioned correctly; no indentation is
    /// inserted even at the start of a line.
    fn raw_write(&mut self, text: &str);

    /// Line break, skipped when already at the start of a line.
    /// `SingleLineWriter` writes a space instead and collapses consecutive
    /// unforced breaks into that one space.
    fn write_line(&mut self);

    /// Line break, emitted unconditionally when `force` is set.
    fn write_line_force(&mut self, force: bool);

    fn increase_indent(&mut self);
    fn decrease_indent(&mut self);

    fn get_text(&self) -> &str;
    /// Length of the output in bytes.
    fn get_text_pos(&self) -> usize;
    /// 0-based line index of the current position.
    fn get_line(&self) -> usize;
    fn get_indent(&self) -> usize;
    /// Column in bytes. At the start of a line this is the column the next
    /// write will land on once indentation is applied.
    fn get_column(&self) -> usize;
    fn is_at_start_of_line(&self) -> bool;
    fn has_trailing_comment(&self) -> bool;
    fn has_trailing_whitespace(&self) -> bool;

    /// Reset to the initial state, keeping configuration.
    fn clear(&mut self);

    fn write_keyword(&mut self, text: &str) {
        self.write(text);
    }

    fn write_operator(&mut self, text: &str) {
        self.write(text);
    }

    fn write_parameter(&mut self, text: &str) {
        self.write(text);
    }

    fn write_property(&mut self, text: &str) {
        self.write(text);
    }

    fn write_punctuation(&mut self, text: &str) {
        self.write(text);
    }

    fn write_space(&mut self, text: &str) {
        self.write(text);
    }

    fn write_string_literal(&mut self, text: &str) {
        self.write(text);
    }

    fn write_symbol(&mut self, text: &str, _symbol: Option<SymbolId>) {
        self.write(text);
    }

    fn write_trailing_semicolon(&mut self, text: &str) {
        self.write(text);
    }

    fn write_literal(&mut self, text: &str) {
        self.write(text);
    }
}
