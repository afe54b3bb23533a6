//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use grammar_pom::config::file::{FileConfig, expand_tilde};
use grammar_pom::config::{ReaderOptions, ScanOptions};

/// Extension appended to generated file stems when none is configured.
pub const DEFAULT_GENERATED_EXTENSION: &str = "go";

/// Command-line arguments for descriptor reading.
#[derive(Parser)]
struct ReaderArgs {
    /// Target-specific grammar variant to prefer, e.g. `GoTarget`
    ///
    /// A reference to `Foo.g4` resolves to `Foo.<VARIANT>.g4` when that file
    /// exists. Can be given multiple times; earlier variants win.
    #[arg(long = "target-variant", action = clap::ArgAction::Append)]
    target_variants: Vec<String>,

    /// Resolve grammar references literally, ignoring target variants
    #[arg(long, conflicts_with = "target_variants")]
    no_target_variants: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads to use for parsing descriptors
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Show per-grammar warnings and descriptor errors
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Directories to skip during scanning
    ///
    /// Can be specified multiple times.
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    #[arg(long)]
    max_depth: Option<usize>,

    /// File name of the build descriptors to look for
    #[arg(long)]
    descriptor_name: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "grammar-pom")]
#[command(
    about = "Extract grammar metadata (kinds, parser/lexer/listener names, generated files) from pom.xml descriptors"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Descriptor files or directories to search for descriptors
    ///
    /// Files are parsed directly; directories are walked recursively.
    /// Defaults to the current directory.
    #[arg(num_args = 0..)]
    paths: Vec<PathBuf>,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,

    /// Extension appended to generated file names (default: go)
    #[arg(long)]
    generated_extension: Option<String>,

    /// Descriptor reading options
    #[command(flatten)]
    reader: ReaderArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the paths to inspect from CLI args, config file, or default.
    ///
    /// Priority: CLI arguments > config file `dirs` > current directory (`.`).
    /// Tilde expansion is applied to paths originating from the config file.
    #[must_use]
    pub fn paths(&self, config: &FileConfig) -> Vec<PathBuf> {
        if !self.paths.is_empty() {
            return self.paths.clone();
        }

        if let Some(ref dirs) = config.dirs
            && !dirs.is_empty()
        {
            return dirs.iter().map(|d| expand_tilde(d)).collect();
        }

        vec![PathBuf::from(".")]
    }

    /// Extension for generated file names.
    ///
    /// Priority: CLI argument > config file > `go`. An empty extension means
    /// bare stems.
    #[must_use]
    pub fn generated_extension(&self, config: &FileConfig) -> Option<String> {
        let extension = self
            .generated_extension
            .clone()
            .or_else(|| config.output.generated_extension.clone())
            .unwrap_or_else(|| DEFAULT_GENERATED_EXTENSION.to_string());

        (!extension.is_empty()).then_some(extension)
    }

    /// Extract descriptor reading options from CLI args and config file.
    ///
    /// Priority: `--no-target-variants` > `--target-variant` > config file > default.
    #[must_use]
    pub fn reader_options(&self, config: &FileConfig) -> ReaderOptions {
        if self.reader.no_target_variants {
            return ReaderOptions {
                target_variants: Vec::new(),
            };
        }

        if !self.reader.target_variants.is_empty() {
            return ReaderOptions {
                target_variants: self.reader.target_variants.clone(),
            };
        }

        config
            .reader
            .target_variants
            .clone()
            .map_or_else(ReaderOptions::default, |target_variants| ReaderOptions {
                target_variants,
            })
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **skip**: merged from both sources (config values first, then CLI)
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.scanning.skip.clone());

        let defaults = ScanOptions::default();

        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(defaults.threads),
            skip,
            max_depth: self.scanning.max_depth.or(config.scanning.max_depth),
            descriptor_name: self
                .scanning
                .descriptor_name
                .clone()
                .or_else(|| config.scanning.descriptor_name.clone())
                .unwrap_or(defaults.descriptor_name),
        }
    }
}
