//! Input handling module

pub mod document;
pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, InputFormat, SUPPORTED_EXTENSIONS};
pub use glob_resolver::resolve_patterns;
