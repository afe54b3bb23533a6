//! Scanning configuration for descriptor discovery.
//!
//! This module defines the options that control how directories are walked
//! when looking for build descriptors.

use std::path::PathBuf;

/// Descriptor file name searched for when none is configured.
pub const DEFAULT_DESCRIPTOR_NAME: &str = "pom.xml";

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to show verbose output including warnings and scan errors
    pub verbose: bool,

    /// Number of threads to use for parsing (0 = default)
    pub threads: usize,

    /// List of directory patterns to skip during scanning
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to scan (None = unlimited)
    pub max_depth: Option<usize>,

    /// File name of the build descriptors to look for
    pub descriptor_name: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            threads: 0,
            skip: Vec::new(),
            max_depth: None,
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
        }
    }
}
