//! Grammar classification.
//!
//! This module reads the header line of an ANTLR `.g4` file and turns it into
//! a [`Grammar`] with one of the closed set of [`GrammarType`]s.
//!
//! ## Main Parts
//!
//! - [`Grammar`] - One classified grammar file
//! - [`GrammarType`] - Parser, lexer or combined
//! - [`parse_grammar_header`] - Classify a grammar file from its header line

#[allow(clippy::module_inception)]
pub mod grammar;
pub mod header;

pub use grammar::{Grammar, GrammarType};
pub use header::{parse_grammar_header, scan_header};
