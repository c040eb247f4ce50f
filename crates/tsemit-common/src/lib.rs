//! Common types and utilities for the tsemit text writers.
//!
//! This crate provides the leaf helpers the writers depend on:
//! - String comparison (`compare_strings_case_insensitive`, `has_prefix`, ...)
//! - Character classification (`is_line_break`, `is_white_space_like`)
//! - Line-start scanning and line/column mapping (`compute_line_starts`, `LineMap`)
//! - Common enums and ids (`NewLineKind`, `SymbolId`)

// Case-sensitive and case-insensitive string comparison
pub mod comparison;
pub use comparison::{
    compare_strings_case_insensitive, compare_strings_case_insensitive_then_sensitive,
    compare_strings_case_sensitive, equate_strings_case_insensitive,
    equate_strings_case_sensitive, has_prefix, has_suffix, string_comparer,
    string_equality_comparer,
};

// Whitespace and line break predicates
pub mod char_codes;
pub use char_codes::{is_line_break, is_white_space_like, is_white_space_single_line};

// Common types - newline configuration and symbol ids
pub mod common;
pub use common::{NewLineKind, SymbolId};

// Line starts and line/column positions
pub mod position;
pub use position::{LineMap, Position, compute_line_starts, contains_line_break};
