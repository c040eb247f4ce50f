use clap::Parser;
use std::path::PathBuf;

use tsemit_common::NewLineKind;
use tsemit_printer::PrinterOptions;
use tsemit_writer::WriterOptions;
use tsemit_writer::options::DEFAULT_INDENT_WIDTH;

/// CLI arguments for the tsemit binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsemit",
    version,
    about = "Render a JSON emit tree as TypeScript text"
)]
pub struct CliArgs {
    /// JSON emit tree to render. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Render on one line, collapsing line breaks and indentation to spaces.
    #[arg(long = "single-line", alias = "singleLine")]
    pub single_line: bool,

    /// Line terminator written by line breaks.
    #[arg(long = "new-line", alias = "newLine", default_value = "lf")]
    pub new_line: NewLineKind,

    /// Spaces per indentation level.
    #[arg(long = "indent-width", alias = "indentWidth", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent_width: usize,

    /// Drop comment nodes from the output.
    #[arg(long = "remove-comments", alias = "removeComments")]
    pub remove_comments: bool,

    /// Print writer position stats as JSON after the text.
    #[arg(long)]
    pub stats: bool,
}

impl CliArgs {
    /// `None` means stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions::from_new_line_kind(self.new_line).with_indent_width(self.indent_width)
    }

    /// Single-line output always strips comments.
    pub fn printer_options(&self) -> PrinterOptions {
        if self.single_line {
            return PrinterOptions::single_line();
        }
        PrinterOptions {
            remove_comments: self.remove_comments,
        }
    }
}
