//! Analysis pipeline: configuration and orchestration

pub mod analyzer;
pub mod config;

pub use analyzer::{excerpt, TextAnalyzer};
pub use config::{ConfigBuilder, PipelineConfig, DEFAULT_EXCERPT_CHARS};
