//! tsemit: text emission for a TypeScript printer.
//!
//! Re-exports the workspace crates under one roof:
//! - `common`: string comparison, character classes, line starts
//! - `writer`: the `EmitTextWriter` trait with `TextWriter` and `SingleLineWriter`
//! - `printer`: `EmitNode` trees and the `Printer` facade
//!
//! The `cli` feature adds the argument parsing and driver behind the
//! `tsemit` binary.

pub use tsemit_common as common;
pub use tsemit_printer as printer;
pub use tsemit_writer as writer;

pub use tsemit_common::{NewLineKind, SymbolId};
pub use tsemit_printer::{
    EmitNode, Printer, PrinterOptions, print_node, print_node_single_line,
    print_node_with_options,
};
pub use tsemit_writer::{EmitTextWriter, SingleLineWriter, TextWriter, WriterOptions};

// Tracing subscriber setup driven by TSEMIT_LOG / TSEMIT_LOG_FORMAT
pub mod tracing_config;

#[cfg(feature = "cli")]
pub mod cli;
