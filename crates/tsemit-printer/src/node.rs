//! Emit tree
//!
//! A token-level tree the printer walks. Leaves carry already-formatted
//! text tagged with the kind of writer call that should emit it; interior
//! nodes describe layout (indentation groups, blocks, sequences).
//!
//! The JSON form uses serde's external tagging in camelCase:
//!
//! ```json
//! {"sequence": [{"keyword": "class"}, {"space": " "}, {"symbol": {"text": "A"}}, "line"]}
//! ```

use serde::{Deserialize, Serialize};
use tsemit_common::SymbolId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmitNode {
    // =========================================================================
    // Tagged text
    // =========================================================================
    Keyword(String),
    Operator(String),
    Parameter(String),
    Property(String),
    Punctuation(String),
    Space(String),
    StringLiteral(String),
    /// Identifier bound to a symbol, when the caller knows it.
    Symbol {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<SymbolId>,
    },
    TrailingSemicolon(String),
    Literal(String),
    /// Untagged text.
    Text(String),
    /// Comment text, dropped when the printer strips comments.
    Comment(String),
    /// Text emitted without indentation (e.g. a verbatim source slice).
    Raw(String),

    // =========================================================================
    // Layout
    // =========================================================================
    /// Line break, skipped at the start of a line.
    Line,
    /// Line break that is always emitted.
    ForcedLine,
    /// Children emitted one indent level deeper.
    Indent(Vec<EmitNode>),
    /// `{ ... }` with each statement on its own line when `multi_line`, or
    /// separated by spaces otherwise.
    Block {
        statements: Vec<EmitNode>,
        #[serde(default, rename = "multiLine")]
        multi_line: bool,
    },
    Sequence(Vec<EmitNode>),
}

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl EmitNode {
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self::Operator(text.into())
    }

    pub fn parameter(text: impl Into<String>) -> Self {
        Self::Parameter(text.into())
    }

    pub fn property(text: impl Into<String>) -> Self {
        Self::Property(text.into())
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self::Punctuation(text.into())
    }

    /// A single space.
    pub fn space() -> Self {
        Self::Space(" ".to_string())
    }

    pub fn string_literal(text: impl Into<String>) -> Self {
        Self::StringLiteral(text.into())
    }

    pub fn symbol(text: impl Into<String>, symbol: Option<SymbolId>) -> Self {
        Self::Symbol {
            text: text.into(),
            symbol,
        }
    }

    pub fn semicolon() -> Self {
        Self::TrailingSemicolon(";".to_string())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    pub fn indent(children: Vec<Self>) -> Self {
        Self::Indent(children)
    }

    pub fn block(statements: Vec<Self>, multi_line: bool) -> Self {
        Self::Block {
            statements,
            multi_line,
        }
    }

    pub fn sequence(children: Vec<Self>) -> Self {
        Self::Sequence(children)
    }

    /// Whether this node or any descendant is a comment.
    pub fn contains_comment(&self) -> bool {
        match self {
            Self::Comment(_) => true,
            Self::Indent(children) | Self::Sequence(children) => {
                children.iter().any(Self::contains_comment)
            }
            Self::Block { statements, .. } => statements.iter().any(Self::contains_comment),
            _ => false,
        }
    }
}
