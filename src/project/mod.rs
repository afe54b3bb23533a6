//! Grammar project model and name derivation.
//!
//! This module contains the data structure holding everything read from a
//! build descriptor, the naming rules computed from it, and a collection type
//! used for reporting.
//!
//! ## Main Parts
//!
//! - [`Project`] - Descriptor fields plus the grammars it references
//! - [`naming`] - Derived parser, lexer and listener names and generated filenames
//! - [`Projects`] - A collection of projects with summary reporting

pub mod naming;
#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for the project model
pub mod project;
pub mod projects;

pub use project::Project;
pub use projects::Projects;
