//! Common types shared across the writer crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line terminator used when a writer emits a line break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewLineKind {
    #[default]
    #[serde(rename = "lf")]
    LineFeed,
    #[serde(rename = "crlf")]
    CarriageReturnLineFeed,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLineKind::LineFeed => "\n",
            NewLineKind::CarriageReturnLineFeed => "\r\n",
        }
    }
}

impl FromStr for NewLineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(NewLineKind::LineFeed),
            "crlf" => Ok(NewLineKind::CarriageReturnLineFeed),
            other => Err(format!("unknown newline kind '{other}', expected 'lf' or 'crlf'")),
        }
    }
}

impl fmt::Display for NewLineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewLineKind::LineFeed => f.write_str("lf"),
            NewLineKind::CarriageReturnLineFeed => f.write_str("crlf"),
        }
    }
}

/// Opaque handle to a binder symbol attached to written identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);
