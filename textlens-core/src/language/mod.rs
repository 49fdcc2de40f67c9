//! Language models and language detection
//!
//! Each supported language is described by a data-driven TOML
//! configuration. English and Portuguese are embedded; further languages
//! can be loaded from files.

pub mod config;
pub mod detector;
pub mod loader;
pub mod stopwords;

pub use config::LanguageConfig;
pub use detector::{LanguageDetector, ProfileDetector, UNKNOWN_LANGUAGE};
pub use loader::{embedded_config, embedded_configs, DEFAULT_LANGUAGE};
pub use stopwords::bundled_stopwords;
