//! # grammar-pom
//!
//! A CLI tool that extracts metadata about ANTLR grammar projects from their
//! Maven `pom.xml` descriptors without running the ANTLR tool.
//!
//! For every descriptor it reports the referenced grammar files, each
//! grammar's kind and name, the parser/lexer/listener type names ANTLR would
//! generate, and the generated file names.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect every pom.xml below the current directory
//! grammar-pom
//!
//! # Inspect a single descriptor, with warnings
//! grammar-pom grammars-v4/json/pom.xml --verbose
//!
//! # Machine-readable output
//! grammar-pom grammars-v4 --json
//! ```

mod cli;

use std::{path::PathBuf, process::exit};

use anyhow::{Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, DEFAULT_GENERATED_EXTENSION};
use colored::Colorize;
use grammar_pom::{
    config::{FileConfig, ReaderOptions},
    output::JsonOutput,
    project::Projects,
    scanner::{ScanResult, Scanner},
};

/// Entry point for the grammar-pom application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, a path that does not exist,
/// or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let paths = args.paths(&file_config);
    let reader_options = args.reader_options(&file_config);
    let scan_options = args.scan_options(&file_config);
    let extension = args.generated_extension(&file_config);
    let verbose = scan_options.verbose;

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let scanner = Scanner::new(scan_options, reader_options).with_quiet(json_mode);
    let result = scan_paths(&scanner, &paths)?;

    if json_mode {
        let output = JsonOutput::from_scan_result(&result, extension.as_deref());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_report(result, extension.as_deref(), verbose);
    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Parse descriptor files directly and walk directories for descriptors.
fn scan_paths(scanner: &Scanner, paths: &[PathBuf]) -> Result<ScanResult> {
    let mut files = Vec::new();
    let mut result = ScanResult::default();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            result.merge(scanner.scan_directory(path));
        } else {
            bail!("{} does not exist", path.display());
        }
    }

    result.merge(scanner.parse_all(files));
    Ok(result)
}

/// Print the human-readable report, with warnings and errors in verbose mode.
fn print_report(result: ScanResult, extension: Option<&str>, verbose: bool) {
    let warning_count = result.warning_count();

    if verbose {
        for parsed in &result.parsed {
            for warning in &parsed.warnings {
                eprintln!("{} {warning}", "warning:".yellow());
            }
        }
        for error in &result.errors {
            eprintln!("{}", error.red());
        }
    }

    let ScanResult { parsed, errors } = result;
    let projects: Projects = parsed
        .into_iter()
        .map(|p| p.project)
        .collect::<Vec<_>>()
        .into();

    println!("Found {} descriptors", projects.len());

    if projects.is_empty() {
        println!("{}", "✨ No grammar descriptors found!".green());
    } else {
        println!("\n{}", "📚 Grammar projects:".bold());
        projects.print_details(extension);
        println!("\n{}", "📊 Summary:".bold());
        projects.print_summary();
    }

    if !verbose && (warning_count > 0 || !errors.is_empty()) {
        println!(
            "\n{} {warning_count} warnings, {} unreadable descriptors (use --verbose for details)",
            "⚠️".yellow(),
            errors.len()
        );
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# grammar-pom configuration
# All values shown are their defaults. Uncomment and change as needed.

# Paths to inspect when none are given on the command line
# dirs = ["."]

[reader]
# Target-specific grammar variants tried before the referenced file, in order
# (Foo.g4 -> Foo.GoTarget.g4)
# target_variants = ["GoTarget"]

[scanning]
# Number of threads to use for parsing (0 = all CPU cores)
# threads = 0

# Show per-grammar warnings and descriptor errors
# verbose = false

# Directories to skip during scanning
# skip = []

# Maximum directory depth to scan (unlimited when unset)
# max_depth = 5

# File name of the build descriptors to look for
# descriptor_name = "pom.xml"

[output]
# Extension appended to generated file names ("" for bare names)
# generated_extension = "go"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_list<T: std::fmt::Display>(val: Option<&[T]>, default: &str) -> String {
        val.map_or_else(
            || format!("{default}  (default)"),
            |v| {
                let items: Vec<String> = v.iter().map(|item| format!("\"{item}\"")).collect();
                format!("[{}]", items.join(", "))
            },
        )
    }

    let dirs: Option<Vec<_>> = config
        .dirs
        .as_ref()
        .map(|dirs| dirs.iter().map(|d| d.display().to_string()).collect());
    let skip: Option<Vec<_>> = config
        .scanning
        .skip
        .as_ref()
        .map(|skip| skip.iter().map(|d| d.display().to_string()).collect());
    let default_variants = show_list(Some(&ReaderOptions::default().target_variants[..]), "");

    format!(
        "\
dirs            = {dirs}

[reader]
target_variants = {target_variants}

[scanning]
threads         = {threads}
verbose         = {verbose}
skip            = {skip}
max_depth       = {max_depth}
descriptor_name = {descriptor_name}

[output]
generated_extension = {generated_extension}",
        dirs = show_list(dirs.as_deref(), "[\".\"]"),
        target_variants = show_list(
            config.reader.target_variants.as_deref(),
            &default_variants
        ),
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
        skip = show_list(skip.as_deref(), "[]"),
        max_depth = show_usize(config.scanning.max_depth, "(unlimited)"),
        descriptor_name = show_str(config.scanning.descriptor_name.as_deref(), "pom.xml"),
        generated_extension = show_str(
            config.output.generated_extension.as_deref(),
            DEFAULT_GENERATED_EXTENSION
        ),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.dirs.is_none());
        assert!(config.reader.target_variants.is_none());
        assert!(config.scanning.threads.is_none());
        assert!(config.output.generated_extension.is_none());
    }

    #[test]
    fn test_format_config_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("target_variants = [\"GoTarget\"]  (default)"));
        assert!(text.contains("descriptor_name = \"pom.xml\"  (default)"));
        assert!(text.contains("generated_extension = \"go\"  (default)"));
    }

    #[test]
    fn test_scan_paths_missing_path_errors() {
        let scanner = Scanner::new(Default::default(), ReaderOptions::default()).with_quiet(true);
        let err = scan_paths(&scanner, &[PathBuf::from("/definitely/not/here")]).unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }
}
