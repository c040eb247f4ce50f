//! Reads an emit tree, renders it through the selected writer and formats
//! the output for stdout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use tsemit_common::{LineMap, Position};
use tsemit_printer::{EmitNode, Printer, PrinterOptions};
use tsemit_writer::{EmitTextWriter, SingleLineWriter, TextWriter};

use crate::cli::args::CliArgs;

/// Top-level input: one node, or a list of nodes printed in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmitDocument {
    Many(Vec<EmitNode>),
    One(EmitNode),
}

impl From<EmitDocument> for EmitNode {
    fn from(document: EmitDocument) -> Self {
        match document {
            EmitDocument::Many(nodes) => EmitNode::Sequence(nodes),
            EmitDocument::One(node) => node,
        }
    }
}

/// Writer position after rendering, as reported by `--stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStats {
    pub text_pos: usize,
    pub line: usize,
    pub column: usize,
    /// End of the text in line/UTF-16 character coordinates.
    pub end: Position,
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub stats: RenderStats,
}

pub fn parse_emit_tree(source: &str) -> Result<EmitNode> {
    let document: EmitDocument =
        serde_json::from_str(source).context("input is not a valid emit tree")?;
    Ok(document.into())
}

/// Read the tree from `path`, or stdin when `path` is `None`.
pub fn read_emit_tree(path: Option<&Path>) -> Result<EmitNode> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read emit tree from stdin")?;
            buffer
        }
    };
    parse_emit_tree(&source)
}

pub fn render<W: EmitTextWriter>(tree: &EmitNode, writer: W, options: PrinterOptions) -> Rendered {
    let mut printer = Printer::new(writer, options);
    printer.emit(tree);
    let writer = printer.finish();

    let text = writer.get_text().to_string();
    let end = LineMap::build(&text).offset_to_position(text.len(), &text);
    let stats = RenderStats {
        text_pos: writer.get_text_pos(),
        line: writer.get_line(),
        column: writer.get_column(),
        end,
    };
    Rendered { text, stats }
}

/// Render according to `args` and return everything destined for stdout.
pub fn run(args: &CliArgs) -> Result<String> {
    let tree = read_emit_tree(args.input_path().map(|path| path.as_path()))?;
    let printer_options = args.printer_options();
    if printer_options.remove_comments && tree.contains_comment() {
        debug!("comments in the input will be dropped");
    }

    let rendered = if args.single_line {
        render(&tree, SingleLineWriter::new(), printer_options)
    } else {
        render(&tree, TextWriter::with_options(args.writer_options()), printer_options)
    };
    info!(
        bytes = rendered.stats.text_pos,
        lines = rendered.stats.line + 1,
        single_line = args.single_line,
        "rendered emit tree"
    );

    let mut output = rendered.text;
    output.push('\n');
    if args.stats {
        let stats = serde_json::to_string(&rendered.stats).context("failed to encode stats")?;
        output.push_str(&stats);
        output.push('\n');
    }
    Ok(output)
}
