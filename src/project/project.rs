//! Core project data structures.
//!
//! A [`Project`] is everything extracted from one build descriptor: its
//! identifying names, the grammar files it references, the grammars those
//! files declare, and the metadata a test harness needs to run them.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::grammar::Grammar;

/// Aggregate result of parsing one build descriptor.
///
/// Built incrementally by the descriptor reader, then handed to the caller
/// and only read from afterward.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Project {
    /// Path of the descriptor this project was read from
    pub file_name: PathBuf,

    /// Long name from `<grammarName>`
    pub long_name: Option<String>,

    /// Resolved grammar files referenced by the descriptor, in reference
    /// order and without duplicates
    pub includes: Vec<PathBuf>,

    /// Grammars classified from `includes`, at most one per type
    ///
    /// May be shorter than `includes` when a file has no recognizable header
    /// or repeats an already-present grammar type.
    pub grammars: Vec<Grammar>,

    /// Entry rule from `<entryPoint>`
    pub entry_point: Option<String>,

    /// Relative path from the descriptor's directory back to the repository root
    pub example_root: Option<String>,

    /// Example input files found under `<exampleFiles>`
    pub examples: Vec<PathBuf>,

    /// Value of `<caseInsensitiveType>`
    pub case_insensitive_type: Option<String>,

    /// Whether `antlr4-maven-plugin` appeared as an `<artifactId>`
    pub found_antlr4_maven_plugin: bool,
}

impl Project {
    /// Create an empty project for the descriptor at `file_name`.
    #[must_use]
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    /// Short name of the project: the name of the descriptor's directory.
    ///
    /// Falls back to the descriptor path itself when it has no named parent.
    #[must_use]
    pub fn short_name(&self) -> String {
        self.file_name
            .parent()
            .and_then(Path::file_name)
            .map_or_else(
                || self.file_name.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Record a referenced grammar file.
    ///
    /// Returns `false` and leaves the project unchanged if `path` is already
    /// included.
    pub fn add_include(&mut self, path: PathBuf) -> bool {
        if self.includes.contains(&path) {
            return false;
        }

        self.includes.push(path);
        true
    }

    /// Record a classified grammar.
    ///
    /// # Errors
    ///
    /// Hands `grammar` back if a grammar of the same type is already present;
    /// a project holds at most one grammar per type.
    pub fn add_grammar(&mut self, grammar: Grammar) -> std::result::Result<(), Grammar> {
        if self.grammar_of_type(grammar.kind).is_some() {
            return Err(grammar);
        }

        self.grammars.push(grammar);
        Ok(())
    }
}

impl Display for Project {
    /// Format as `long name (descriptor path)`, or just the path when the
    /// descriptor declares no `<grammarName>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(name) = &self.long_name {
            write!(f, "{name} ({})", self.file_name.display())
        } else {
            write!(f, "{}", self.file_name.display())
        }
    }
}
