//! Configuration for descriptor reading, scanning and output.
//!
//! Options are plain structs built by the CLI from arguments layered over the
//! optional [`FileConfig`].

pub mod file;
pub mod reader;
pub mod scan;

pub use file::FileConfig;
pub use reader::ReaderOptions;
pub use scan::ScanOptions;
