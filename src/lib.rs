//! # grammar-pom
//!
//! Extracts structured metadata about ANTLR grammar projects from their Maven
//! `pom.xml` descriptors and the header lines of their `.g4` files, without
//! invoking the ANTLR tool.
//!
//! ```no_run
//! use std::path::Path;
//! use grammar_pom::parse_descriptor;
//!
//! let parsed = parse_descriptor(Path::new("grammars-v4/json/pom.xml"))?;
//! for warning in &parsed.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("{}", parsed.project.parser_name()?);
//! println!("{:?}", parsed.project.generated_filenames());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod grammar;
pub mod output;
pub mod project;
pub mod scanner;

pub use config::{ReaderOptions, ScanOptions};
pub use descriptor::{DescriptorReader, ParsedDescriptor, Warning, parse_descriptor};
pub use error::{DescriptorError, HeaderError, NamingError, UnknownGrammarType};
pub use grammar::{Grammar, GrammarType, parse_grammar_header};
pub use project::{Project, Projects};
