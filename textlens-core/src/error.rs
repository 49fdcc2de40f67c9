//! Error types for the analysis core

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Pipeline configuration rejected by validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Language configuration failed validation
    #[error("invalid language configuration '{code}': {reason}")]
    InvalidLanguageConfig {
        /// Language code of the rejected configuration
        code: String,
        /// Why the configuration was rejected
        reason: String,
    },

    /// No annotation model is registered for the language
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),

    /// The linguistic annotator failed on the input
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Language configuration could not be parsed
    #[error("failed to parse language configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tokenizer pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading a language configuration from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
