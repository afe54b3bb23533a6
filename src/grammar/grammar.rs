//! Core grammar data structures.
//!
//! A [`Grammar`] is one classified `.g4` file: the identifier it declares,
//! where it lives, and which of the three grammar kinds it is.

use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

use serde::Serialize;

use crate::error::UnknownGrammarType;

/// The kind of a grammar file, taken from its header line.
///
/// ANTLR grammars are either a single combined file or a split pair of
/// lexer and parser files. Any other kind is unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrammarType {
    /// `parser grammar FooParser;`
    Parser,

    /// `lexer grammar FooLexer;`
    Lexer,

    /// `grammar Foo;` defining both lexer and parser rules.
    Combined,
}

impl GrammarType {
    /// All grammar types, in the order the header scanner tests their keywords.
    pub const ALL: [Self; 3] = [Self::Combined, Self::Lexer, Self::Parser];

    /// The upper-case name used in descriptors and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parser => "PARSER",
            Self::Lexer => "LEXER",
            Self::Combined => "COMBINED",
        }
    }

    /// The header keyword that introduces a grammar of this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Parser => "parser",
            Self::Lexer => "lexer",
            Self::Combined => "grammar",
        }
    }
}

impl Display for GrammarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrammarType {
    type Err = UnknownGrammarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PARSER" => Ok(Self::Parser),
            "LEXER" => Ok(Self::Lexer),
            "COMBINED" => Ok(Self::Combined),
            other => Err(UnknownGrammarType(other.to_string())),
        }
    }
}

/// One classified grammar-source file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Grammar {
    /// Identifier declared on the header line (e.g. `FooParser`).
    pub name: String,

    /// Resolved path of the grammar file.
    pub filename: PathBuf,

    /// Kind declared on the header line.
    #[serde(rename = "type")]
    pub kind: GrammarType,
}

impl Grammar {
    /// Create a new grammar.
    #[must_use]
    pub fn new(name: impl Into<String>, filename: impl Into<PathBuf>, kind: GrammarType) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            kind,
        }
    }
}

impl Display for Grammar {
    /// Format as `KIND Name (path)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.name, self.filename.display())
    }
}
