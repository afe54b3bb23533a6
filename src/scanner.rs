//! Descriptor discovery and batch parsing.
//!
//! This module walks directory trees looking for build descriptors and parses
//! every one it finds. Discovery is a single sequential walk; parsing runs in
//! parallel since each descriptor is independent of the others.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::{ReaderOptions, ScanOptions},
    descriptor::{DescriptorReader, ParsedDescriptor},
};

/// Outcome of parsing a batch of descriptors.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Successfully parsed descriptors, sorted by descriptor path
    pub parsed: Vec<ParsedDescriptor>,

    /// One message per descriptor that could not be parsed at all
    pub errors: Vec<String>,
}

impl ScanResult {
    /// Total number of per-reference warnings across all parsed descriptors.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.parsed.iter().map(|p| p.warnings.len()).sum()
    }

    /// Append another result, keeping `parsed` sorted by descriptor path.
    pub fn merge(&mut self, other: Self) {
        self.parsed.extend(other.parsed);
        self.parsed
            .sort_by(|a, b| a.project.file_name.cmp(&b.project.file_name));
        self.errors.extend(other.errors);
    }
}

/// Directory scanner for build descriptors.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// Reader applied to every descriptor found
    reader: DescriptorReader,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions, reader_options: ReaderOptions) -> Self {
        Self {
            scan_options,
            reader: DescriptorReader::new(reader_options),
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Find every descriptor under `root`, in walk order.
    ///
    /// Hidden directories, build output directories and directories named in
    /// the skip list are not descended into. `root` itself is always walked.
    #[must_use]
    pub fn find_descriptors(&self, root: &Path) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(root).sort_by_file_name();
        if let Some(depth) = self.scan_options.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
            .into_iter()
            .filter_entry(|entry| self.should_scan_entry(entry))
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_str() == Some(self.scan_options.descriptor_name.as_str())
            })
            .map(DirEntry::into_path)
            .collect()
    }

    /// Find and parse every descriptor under `root`.
    #[must_use]
    pub fn scan_directory(&self, root: &Path) -> ScanResult {
        self.parse_all(self.find_descriptors(root))
    }

    /// Parse `paths` in parallel.
    #[must_use]
    pub fn parse_all(&self, paths: Vec<PathBuf>) -> ScanResult {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Parsing descriptors...");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };

        let parsed_count = AtomicUsize::new(0);

        let outcomes: Vec<_> = paths
            .into_par_iter()
            .map(|path| {
                let outcome = self.reader.read(&path);
                let n = parsed_count.fetch_add(1, Ordering::Relaxed) + 1;
                progress.set_message(format!("Parsing descriptors... {n} done"));
                outcome
            })
            .collect();

        progress.finish_and_clear();

        let mut result = ScanResult::default();
        for outcome in outcomes {
            match outcome {
                Ok(parsed) => result.parsed.push(parsed),
                Err(e) => result.errors.push(e.to_string()),
            }
        }
        result
            .parsed
            .sort_by(|a, b| a.project.file_name.cmp(&b.project.file_name));

        result
    }

    /// Determine if a directory entry should be walked.
    ///
    /// Only applies below the root; files are always kept.
    fn should_scan_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let path = entry.path();

        if self.is_path_in_skip_list(path) {
            return false;
        }

        !Self::is_hidden_directory(path) && !Self::is_excluded_directory(path)
    }

    /// Check if the directory's own name is in the skip list
    fn is_path_in_skip_list(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        self.scan_options
            .skip
            .iter()
            .any(|skip| skip.as_os_str() == name)
    }

    /// Check if directory is hidden
    fn is_hidden_directory(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
    }

    /// Check if directory holds build output rather than sources
    fn is_excluded_directory(path: &Path) -> bool {
        let excluded_dirs = ["target", "node_modules", "build", "out"];

        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| excluded_dirs.contains(&name))
    }
}
