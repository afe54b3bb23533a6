//! Error types for grammar header scanning, descriptor reading and name
//! derivation.
//!
//! Each component owns its own error enum so callers can decide which
//! failures are fatal. Descriptor-level failures abort a parse; header
//! failures are downgraded to [`crate::descriptor::Warning`]s by the
//! descriptor reader; naming failures only affect the single call that
//! raised them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while classifying a single grammar file.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The grammar file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A header line was found but did not contain a grammar name.
    #[error("failed to parse grammar name: {line:?}")]
    Parse { line: String },

    /// The file ended before any header line was found.
    #[error("failed to find a grammar header")]
    NotFound,
}

/// Errors that abort a whole descriptor parse.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor could not be opened or read.
    #[error("failed to read descriptor {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not well-formed markup, or a recognized element's
    /// body is not valid text.
    #[error("failed to decode descriptor {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The example-file pattern built from `exampleFiles` is malformed.
    #[error("invalid example file pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl DescriptorError {
    /// Create a decode error for the descriptor at `path`.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by the name-derivation functions on [`crate::project::Project`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// Neither a parser nor a combined grammar is present.
    #[error("{project:?} does not contain a parser")]
    NoParser { project: String },

    /// Neither a lexer nor a combined grammar is present.
    #[error("{project:?} does not contain a lexer")]
    NoLexer { project: String },
}

/// Raised when a string does not name one of the known grammar types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar type {0:?}")]
pub struct UnknownGrammarType(pub String);
