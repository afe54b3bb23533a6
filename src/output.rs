//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a run. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing all
//! human-readable output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{descriptor::ParsedDescriptor, project::Project, scanner::ScanResult};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// One entry per successfully parsed descriptor.
    pub projects: Vec<JsonProjectEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,

    /// Descriptors that could not be parsed at all.
    pub errors: Vec<String>,
}

/// A single project entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonProjectEntry {
    /// Everything read from the descriptor.
    #[serde(flatten)]
    pub project: Project,

    /// Derived parser type name, or `null` when the project has no parser.
    pub parser_name: Option<String>,

    /// Derived lexer type name, or `null` when the project has no lexer.
    pub lexer_name: Option<String>,

    /// Derived listener type name, or `null` when the project has no parser.
    pub listener_name: Option<String>,

    /// Files the grammar compiler would generate.
    pub generated_files: Vec<String>,

    /// Per-reference warnings raised while reading the descriptor.
    pub warnings: Vec<String>,
}

/// Aggregated summary across all parsed descriptors.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of descriptors parsed.
    pub total_projects: usize,

    /// Number of descriptors declaring `antlr4-maven-plugin`.
    pub with_antlr4_maven_plugin: usize,

    /// Grammar count per type (`"COMBINED"`, `"LEXER"`, `"PARSER"`).
    pub grammars_by_type: BTreeMap<String, usize>,

    /// Total number of warnings.
    pub total_warnings: usize,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a scan result.
    ///
    /// `extension` is appended to every generated file stem; pass `None` for
    /// bare stems.
    #[must_use]
    pub fn from_scan_result(result: &ScanResult, extension: Option<&str>) -> Self {
        Self {
            projects: result
                .parsed
                .iter()
                .map(|parsed| JsonProjectEntry::from_parsed(parsed, extension))
                .collect(),
            summary: JsonSummary::from_scan_result(result),
            errors: result.errors.clone(),
        }
    }
}

impl JsonProjectEntry {
    /// Convert a parsed descriptor into a `JsonProjectEntry`.
    #[must_use]
    pub fn from_parsed(parsed: &ParsedDescriptor, extension: Option<&str>) -> Self {
        let project = &parsed.project;
        let generated_files = match extension {
            Some(ext) => project.generated_filenames_with_extension(ext),
            None => project.generated_filenames(),
        };

        Self {
            project: project.clone(),
            parser_name: project.parser_name().ok(),
            lexer_name: project.lexer_name().ok(),
            listener_name: project.listener_name().ok(),
            generated_files,
            warnings: parsed.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from a scan result.
    #[must_use]
    pub fn from_scan_result(result: &ScanResult) -> Self {
        let mut grammars_by_type: BTreeMap<String, usize> = BTreeMap::new();

        for kind in result
            .parsed
            .iter()
            .flat_map(|p| &p.project.grammars)
            .map(|g| g.kind)
        {
            *grammars_by_type.entry(kind.to_string()).or_insert(0) += 1;
        }

        Self {
            total_projects: result.parsed.len(),
            with_antlr4_maven_plugin: result
                .parsed
                .iter()
                .filter(|p| p.project.found_antlr4_maven_plugin)
                .count(),
            grammars_by_type,
            total_warnings: result.warning_count(),
        }
    }
}
