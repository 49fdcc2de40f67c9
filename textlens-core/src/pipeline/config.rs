//! Pipeline configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::DEFAULT_LANGUAGE;
use crate::metrics::{DEFAULT_FREQUENCY_LIMIT, DEFAULT_KEYWORD_LIMIT, DEFAULT_WORDS_PER_MINUTE};

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 500;

/// Tunable values of the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Reading speed used for the reading-time estimate
    pub words_per_minute: f64,
    /// Maximum number of keywords
    pub keyword_limit: usize,
    /// Maximum number of word-frequency entries
    pub frequency_limit: usize,
    /// Length of the text excerpt in characters
    pub excerpt_chars: usize,
    /// Language whose model annotates undetected or unsupported text
    pub default_language: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            frequency_limit: DEFAULT_FREQUENCY_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.words_per_minute.is_finite() || self.words_per_minute <= 0.0 {
            return Err(Error::Configuration(format!(
                "words_per_minute must be a positive number, got {}",
                self.words_per_minute
            )));
        }

        if self.excerpt_chars == 0 {
            return Err(Error::Configuration(
                "excerpt_chars must be greater than 0".to_string(),
            ));
        }

        if self.default_language.trim().is_empty() {
            return Err(Error::Configuration(
                "default_language must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: PipelineConfig,
}

impl ConfigBuilder {
    /// Set the reading speed
    pub fn words_per_minute(mut self, wpm: f64) -> Self {
        self.config.words_per_minute = wpm;
        self
    }

    /// Set the keyword limit
    pub fn keyword_limit(mut self, limit: usize) -> Self {
        self.config.keyword_limit = limit;
        self
    }

    /// Set the word-frequency limit
    pub fn frequency_limit(mut self, limit: usize) -> Self {
        self.config.frequency_limit = limit;
        self
    }

    /// Set the excerpt length
    pub fn excerpt_chars(mut self, chars: usize) -> Self {
        self.config.excerpt_chars = chars;
        self
    }

    /// Set the fallback language
    pub fn default_language(mut self, code: impl Into<String>) -> Self {
        self.config.default_language = code.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
