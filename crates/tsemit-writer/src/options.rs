//! Writer configuration.

use serde::{Deserialize, Serialize};
use tsemit_common::NewLineKind;

/// Default number of spaces per indent level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Configuration preserved across [`clear`](crate::EmitTextWriter::clear).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WriterOptions {
    /// Line terminator written by `write_line`. Any string is accepted,
    /// including the empty string.
    pub new_line: String,
    /// Spaces inserted per indent level at the start of a line.
    pub indent_width: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            new_line: NewLineKind::LineFeed.as_str().to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl WriterOptions {
    pub fn new(new_line: impl Into<String>) -> Self {
        WriterOptions {
            new_line: new_line.into(),
            ..Default::default()
        }
    }

    pub fn from_new_line_kind(kind: NewLineKind) -> Self {
        Self::new(kind.as_str())
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}
