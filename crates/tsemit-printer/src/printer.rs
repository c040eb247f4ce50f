//! Emit-tree printer.
//!
//! `Printer` owns a writer for the duration of one printing pass. Use
//! [`print_node`] / [`print_node_single_line`] when a fresh writer per call
//! is all that is needed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use tsemit_writer::{EmitTextWriter, SingleLineWriter, TextWriter, WriterOptions};

use crate::node::EmitNode;

/// Options controlling what the printer emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrinterOptions {
    /// Drop `EmitNode::Comment` leaves.
    pub remove_comments: bool,
}

impl PrinterOptions {
    /// Options used for one-line renderings (hover text).
    pub fn single_line() -> Self {
        PrinterOptions {
            remove_comments: true,
        }
    }
}

pub struct Printer<W: EmitTextWriter> {
    writer: W,
    options: PrinterOptions,
}

impl<W: EmitTextWriter> Printer<W> {
    pub fn new(writer: W, options: PrinterOptions) -> Self {
        Printer { writer, options }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Consume the printer and hand back its writer.
    pub fn finish(self) -> W {
        debug!(
            text_pos = self.writer.get_text_pos(),
            line = self.writer.get_line(),
            "printer finished"
        );
        self.writer
    }

    pub fn emit(&mut self, node: &EmitNode) {
        match node {
            EmitNode::Keyword(text) => self.writer.write_keyword(text),
            EmitNode::Operator(text) => self.writer.write_operator(text),
            EmitNode::Parameter(text) => self.writer.write_parameter(text),
            EmitNode::Property(text) => self.writer.write_property(text),
            EmitNode::Punctuation(text) => self.writer.write_punctuation(text),
            EmitNode::Space(text) => self.writer.write_space(text),
            EmitNode::StringLiteral(text) => self.writer.write_string_literal(text),
            EmitNode::Symbol { text, symbol } => self.writer.write_symbol(text, *symbol),
            EmitNode::TrailingSemicolon(text) => self.writer.write_trailing_semicolon(text),
            EmitNode::Literal(text) => self.writer.write_literal(text),
            EmitNode::Text(text) => self.writer.write(text),
            EmitNode::Comment(text) => self.emit_comment(text),
            EmitNode::Raw(text) => self.writer.raw_write(text),
            EmitNode::Line => self.writer.write_line(),
            EmitNode::ForcedLine => self.writer.write_line_force(true),
            EmitNode::Indent(children) => {
                self.writer.increase_indent();
                self.emit_list(children);
                self.writer.decrease_indent();
            }
            EmitNode::Block {
                statements,
                multi_line,
            } => {
                if *multi_line {
                    self.emit_block_multi_line(statements);
                } else {
                    self.emit_block_single_line(statements);
                }
            }
            EmitNode::Sequence(children) => self.emit_list(children),
        }
    }

    pub fn emit_list(&mut self, nodes: &[EmitNode]) {
        for node in nodes {
            self.emit(node);
        }
    }

    fn emit_comment(&mut self, text: &str) {
        if self.options.remove_comments {
            trace!(len = text.len(), "comment stripped");
            return;
        }
        self.writer.write_comment(text);
    }

    fn emit_block_multi_line(&mut self, statements: &[EmitNode]) {
        self.writer.write_punctuation("{");
        self.writer.increase_indent();
        let remove_comments = self.options.remove_comments;
        for stmt in statements
            .iter()
            .filter(|stmt| !is_stripped(stmt, remove_comments))
        {
            self.writer.write_line();
            self.emit(stmt);
        }
        self.writer.decrease_indent();
        self.writer.write_line();
        self.writer.write_punctuation("}");
    }

    fn emit_block_single_line(&mut self, statements: &[EmitNode]) {
        self.writer.write_punctuation("{");
        let remove_comments = self.options.remove_comments;
        for stmt in statements
            .iter()
            .filter(|stmt| !is_stripped(stmt, remove_comments))
        {
            self.writer.write_space(" ");
            self.emit(stmt);
        }
        self.writer.write_space(" ");
        self.writer.write_punctuation("}");
    }
}

/// Statements that print nothing once comments are stripped. Blocks skip
/// them so they leave no separator behind.
fn is_stripped(stmt: &EmitNode, remove_comments: bool) -> bool {
    remove_comments && matches!(stmt, EmitNode::Comment(_))
}

/// Print a node with a fresh `TextWriter` using `"\n"` line breaks.
pub fn print_node(node: &EmitNode) -> String {
    print_node_with_options(node, WriterOptions::default(), PrinterOptions::default())
}

pub fn print_node_with_options(
    node: &EmitNode,
    writer_options: WriterOptions,
    printer_options: PrinterOptions,
) -> String {
    let mut printer = Printer::new(TextWriter::with_options(writer_options), printer_options);
    printer.emit(node);
    printer.finish().into_text()
}

/// Print a node onto one line with comments stripped.
pub fn print_node_single_line(node: &EmitNode) -> String {
    let mut printer = Printer::new(SingleLineWriter::new(), PrinterOptions::single_line());
    printer.emit(node);
    printer.finish().into_text()
}

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod tests;
