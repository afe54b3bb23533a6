//! Collection management for parsed grammar projects.
//!
//! This module provides the `Projects` struct which wraps the projects read
//! from one or more descriptors and provides summary reporting on them.

use colored::Colorize;

use crate::grammar::GrammarType;

use super::Project;

/// A collection of parsed grammar projects.
///
/// The scanner returns projects sorted by descriptor path; `Projects` keeps
/// that order for display.
#[derive(Debug, Default)]
pub struct Projects(Vec<Project>);

impl From<Vec<Project>> for Projects {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

impl Projects {
    /// Get the number of projects in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a slice of the underlying project collection.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
    }

    /// Count grammars of `kind` across all projects.
    #[must_use]
    pub fn count_grammars(&self, kind: GrammarType) -> usize {
        self.0
            .iter()
            .flat_map(|p| &p.grammars)
            .filter(|g| g.kind == kind)
            .count()
    }

    /// Number of projects whose descriptor declares `antlr4-maven-plugin`.
    #[must_use]
    pub fn count_with_plugin(&self) -> usize {
        self.0.iter().filter(|p| p.found_antlr4_maven_plugin).count()
    }

    /// Print each project with its grammars and derived names.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   📜 JSON (grammars/json/pom.xml)
    ///      🧩 COMBINED JSON (grammars/json/JSON.g4)
    ///      parser JSONParser, lexer JSONLexer, listener JSONListener
    ///      generates json_base_listener.go, json_listener.go, ...
    /// ```
    pub fn print_details(&self, extension: Option<&str>) {
        for project in &self.0 {
            println!("  📜 {}", project.to_string().bold());

            for grammar in &project.grammars {
                println!("     {} {grammar}", icon_for_grammar_type(grammar.kind));
            }

            let parser = project
                .parser_name()
                .map_or_else(|_| "-".dimmed().to_string(), |n| n.bright_white().to_string());
            let lexer = project
                .lexer_name()
                .map_or_else(|_| "-".dimmed().to_string(), |n| n.bright_white().to_string());
            let listener = project
                .listener_name()
                .map_or_else(|_| "-".dimmed().to_string(), |n| n.bright_white().to_string());
            println!("     parser {parser}, lexer {lexer}, listener {listener}");

            let files = match extension {
                Some(ext) => project.generated_filenames_with_extension(ext),
                None => project.generated_filenames(),
            };
            if !files.is_empty() {
                println!("     generates {}", files.join(", ").dimmed());
            }
        }
    }

    /// Print counts of grammars by type across the collection.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🧩 4 combined grammars
    ///   🔤 2 lexer grammars
    ///   🌳 2 parser grammars
    ///   🔌 7 of 8 descriptors use antlr4-maven-plugin
    /// ```
    pub fn print_summary(&self) {
        let type_entries: &[(GrammarType, &str)] = &[
            (GrammarType::Combined, "combined"),
            (GrammarType::Lexer, "lexer"),
            (GrammarType::Parser, "parser"),
        ];

        for (kind, label) in type_entries {
            let count = self.count_grammars(*kind);

            if count > 0 {
                println!(
                    "  {} {} {label} grammars",
                    icon_for_grammar_type(*kind),
                    count.to_string().bright_white(),
                );
            }
        }

        println!(
            "  🔌 {} of {} descriptors use antlr4-maven-plugin",
            self.count_with_plugin().to_string().bright_green().bold(),
            self.len()
        );
    }
}

/// Return the icon for a given grammar type.
const fn icon_for_grammar_type(kind: GrammarType) -> &'static str {
    match kind {
        GrammarType::Combined => "🧩",
        GrammarType::Lexer => "🔤",
        GrammarType::Parser => "🌳",
    }
}
