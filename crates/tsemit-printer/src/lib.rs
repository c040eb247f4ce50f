//! Printer facade over the tsemit text writers.
//!
//! The printer walks an [`EmitNode`] tree and drives any
//! [`EmitTextWriter`](tsemit_writer::EmitTextWriter). The same tree renders
//! as indented multi-line text through a `TextWriter` or as one line
//! through a `SingleLineWriter`.
//!
//! ```
//! use tsemit_printer::{EmitNode, print_node, print_node_single_line};
//!
//! let tree = EmitNode::sequence(vec![
//!     EmitNode::keyword("class"),
//!     EmitNode::space(),
//!     EmitNode::symbol("A", None),
//!     EmitNode::space(),
//!     EmitNode::block(vec![], true),
//! ]);
//! assert_eq!(print_node(&tree), "class A {\n}");
//! assert_eq!(print_node_single_line(&tree), "class A { }");
//! ```

pub mod node;
pub use node::EmitNode;

pub mod printer;
pub use printer::{
    Printer, PrinterOptions, print_node, print_node_single_line, print_node_with_options,
};
