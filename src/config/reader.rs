//! Descriptor reading configuration.
//!
//! This module defines the options that control how grammar references in a
//! descriptor are resolved to files on disk.

use std::path::{Path, PathBuf};

/// Target variant tried when no other is configured.
pub const DEFAULT_TARGET_VARIANT: &str = "GoTarget";

/// Configuration for descriptor reading behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Target-specific grammar variants, in order of preference
    ///
    /// A reference to `Foo.g4` is replaced by `Foo.<variant>.g4` for the
    /// first variant that exists on disk.
    pub target_variants: Vec<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            target_variants: vec![DEFAULT_TARGET_VARIANT.to_string()],
        }
    }
}

impl ReaderOptions {
    /// Candidate paths for a referenced grammar file, preferred first.
    ///
    /// Each target variant is inserted before the file's extension, and the
    /// literal path comes last. A path without an extension has no variants.
    #[must_use]
    pub fn candidates(&self, path: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(self.target_variants.len() + 1);

        if let Some(extension) = path.extension() {
            let extension = extension.to_string_lossy();
            candidates.extend(
                self.target_variants
                    .iter()
                    .map(|variant| path.with_extension(format!("{variant}.{extension}"))),
            );
        }

        candidates.push(path.to_path_buf());
        candidates
    }
}
