//! Derived identifiers and generated filenames.
//!
//! These mirror the naming rules of ANTLR's Go target: the parser, lexer and
//! listener type names, and the files the tool writes for each grammar.
//! Everything here is pure and works on a finished [`Project`].

use crate::{
    error::NamingError,
    grammar::{Grammar, GrammarType},
};

use super::Project;

const PARSER_SUFFIX: &str = "Parser";
const LEXER_SUFFIX: &str = "Lexer";
const LISTENER_SUFFIX: &str = "Listener";

impl Project {
    /// Return the first grammar of type `kind`, if any.
    #[must_use]
    pub fn grammar_of_type(&self, kind: GrammarType) -> Option<&Grammar> {
        self.grammars.iter().find(|g| g.kind == kind)
    }

    /// Prefer a grammar of type `kind`, falling back to a combined grammar.
    fn grammar_or_combined(&self, kind: GrammarType) -> Option<&Grammar> {
        self.grammar_of_type(kind)
            .or_else(|| self.grammar_of_type(GrammarType::Combined))
    }

    fn no_parser(&self) -> NamingError {
        NamingError::NoParser {
            project: self.file_name.display().to_string(),
        }
    }

    fn no_lexer(&self) -> NamingError {
        NamingError::NoLexer {
            project: self.file_name.display().to_string(),
        }
    }

    /// Base name of the parser grammar.
    ///
    /// A parser grammar's name loses its trailing `Parser`; a combined
    /// grammar's name is used as-is.
    ///
    /// # Errors
    ///
    /// [`NamingError::NoParser`] if there is neither a parser nor a combined grammar.
    pub fn parser_base_name(&self) -> Result<&str, NamingError> {
        match self.grammar_or_combined(GrammarType::Parser) {
            Some(g) if g.kind == GrammarType::Parser => Ok(strip_suffix(&g.name, PARSER_SUFFIX)),
            Some(g) => Ok(&g.name),
            None => Err(self.no_parser()),
        }
    }

    /// Base name of the lexer grammar.
    ///
    /// # Errors
    ///
    /// [`NamingError::NoLexer`] if there is neither a lexer nor a combined grammar.
    pub fn lexer_base_name(&self) -> Result<&str, NamingError> {
        match self.grammar_or_combined(GrammarType::Lexer) {
            Some(g) if g.kind == GrammarType::Lexer => Ok(strip_suffix(&g.name, LEXER_SUFFIX)),
            Some(g) => Ok(&g.name),
            None => Err(self.no_lexer()),
        }
    }

    /// Name of the generated parser type, e.g. `FooParser`.
    ///
    /// # Errors
    ///
    /// [`NamingError::NoParser`] if there is neither a parser nor a combined grammar.
    pub fn parser_name(&self) -> Result<String, NamingError> {
        Ok(format!("{}{PARSER_SUFFIX}", self.parser_base_name()?))
    }

    /// Name of the generated lexer type, e.g. `FooLexer`.
    ///
    /// # Errors
    ///
    /// [`NamingError::NoLexer`] if there is neither a lexer nor a combined grammar.
    pub fn lexer_name(&self) -> Result<String, NamingError> {
        Ok(format!("{}{LEXER_SUFFIX}", self.lexer_base_name()?))
    }

    /// Name of the generated listener type.
    ///
    /// Unlike [`Self::parser_name`], the parser grammar's full name is kept,
    /// so `FooParser` yields `FooParserListener`.
    ///
    /// # Errors
    ///
    /// [`NamingError::NoParser`] if there is neither a parser nor a combined grammar.
    pub fn listener_name(&self) -> Result<String, NamingError> {
        self.grammar_or_combined(GrammarType::Parser)
            .map(|g| format!("{}{LISTENER_SUFFIX}", g.name))
            .ok_or_else(|| self.no_parser())
    }

    /// Stems of every file generated for this project, grammar by grammar.
    #[must_use]
    pub fn generated_filenames(&self) -> Vec<String> {
        self.grammars
            .iter()
            .flat_map(Grammar::generated_filenames)
            .collect()
    }

    /// Like [`Self::generated_filenames`] with `.{extension}` appended.
    ///
    /// An empty extension leaves the stems bare.
    #[must_use]
    pub fn generated_filenames_with_extension(&self, extension: &str) -> Vec<String> {
        if extension.is_empty() {
            return self.generated_filenames();
        }

        self.generated_filenames()
            .into_iter()
            .map(|stem| format!("{stem}.{extension}"))
            .collect()
    }
}

impl Grammar {
    /// Stems of the files ANTLR generates for this grammar.
    ///
    /// - lexer `FooLexer`: `foo_lexer`
    /// - parser `FooParser`: `fooparser_base_listener`, `fooparser_listener`, `foo_parser`
    /// - combined `Foo`: `foo_base_listener`, `foo_listener`, `foo_parser`, `foo_lexer`
    #[must_use]
    pub fn generated_filenames(&self) -> Vec<String> {
        let base = self.name.to_lowercase();

        match self.kind {
            GrammarType::Lexer => {
                let lexer_base = strip_suffix(&self.name, LEXER_SUFFIX).to_lowercase();
                vec![format!("{lexer_base}_lexer")]
            }
            GrammarType::Parser => {
                let parser_base = strip_suffix(&self.name, PARSER_SUFFIX).to_lowercase();
                vec![
                    format!("{base}_base_listener"),
                    format!("{base}_listener"),
                    format!("{parser_base}_parser"),
                ]
            }
            GrammarType::Combined => vec![
                format!("{base}_base_listener"),
                format!("{base}_listener"),
                format!("{base}_parser"),
                format!("{base}_lexer"),
            ],
        }
    }
}

fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}
