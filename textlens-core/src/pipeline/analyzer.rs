//! Pipeline Orchestrator

use std::sync::Arc;

use super::config::PipelineConfig;
use crate::annotator::{Annotator, AnnotatorRegistry};
use crate::error::{Error, Result};
use crate::language::{LanguageDetector, ProfileDetector, UNKNOWN_LANGUAGE};
use crate::metrics;
use crate::model::AnalysisResult;
use crate::readability;

/// Runs detection, annotation and every metric over one text
///
/// The analyzer holds no per-call state; concurrent [`analyze`](Self::analyze)
/// calls share only the read-only model registry.
#[derive(Clone)]
pub struct TextAnalyzer {
    registry: Arc<AnnotatorRegistry>,
    detector: Arc<dyn LanguageDetector>,
    config: PipelineConfig,
}

impl TextAnalyzer {
    /// Analyzer over the embedded languages with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(PipelineConfig::default())
    }

    /// Analyzer over the embedded languages with custom settings
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        Self::from_parts(
            Arc::new(AnnotatorRegistry::builtin()?),
            Arc::new(ProfileDetector::builtin()),
            config,
        )
    }

    /// Analyzer from explicit collaborators
    pub fn from_parts(
        registry: Arc<AnnotatorRegistry>,
        detector: Arc<dyn LanguageDetector>,
        config: PipelineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            detector,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Model registry
    pub fn registry(&self) -> &AnnotatorRegistry {
        &self.registry
    }

    /// Analyze `text`
    ///
    /// Returns `Ok(None)` for empty or whitespace-only input. Annotator
    /// failures surface as [`Error::Annotation`].
    pub fn analyze(&self, text: &str) -> Result<Option<AnalysisResult>> {
        if text.trim().is_empty() {
            tracing::debug!("Empty input, nothing to analyze");
            return Ok(None);
        }

        let language_code = self.detector.detect(text);
        let annotator = self.annotator_for(&language_code);
        tracing::debug!(
            "Detected language '{}', annotating with '{}' model",
            language_code,
            annotator.language_code()
        );

        let doc = annotator.annotate(text).map_err(|e| match e {
            Error::Annotation(_) => e,
            other => Error::Annotation(other.to_string()),
        })?;
        tracing::debug!(
            "Annotated {} tokens in {} sentences with {} entities",
            doc.tokens().len(),
            doc.sentences().len(),
            doc.entities().len()
        );

        let statistics = metrics::statistics(&doc);
        tracing::trace!("Statistics: {:?}", statistics);

        let keywords = metrics::keywords(&doc, self.config.keyword_limit);
        tracing::trace!("Keywords: {:?}", keywords);

        let word_frequencies = metrics::word_frequencies(&doc, self.config.frequency_limit);
        let pos_distribution = metrics::pos_distribution(&doc);
        let named_entities = metrics::named_entities(&doc);
        tracing::trace!(
            "{} frequency entries, {} POS labels, {} entity groups",
            word_frequencies.len(),
            pos_distribution.len(),
            named_entities.as_ref().map_or(0, |groups| groups.len())
        );

        let reading_time_minutes =
            metrics::reading_time_minutes(statistics.total_words, self.config.words_per_minute);
        let readability_grade = readability::grade(text);

        Ok(Some(AnalysisResult {
            language_code,
            statistics,
            keywords,
            word_frequencies,
            pos_distribution,
            named_entities,
            reading_time_minutes,
            readability_grade,
            text_excerpt: excerpt(text, self.config.excerpt_chars),
        }))
    }

    fn annotator_for(&self, language_code: &str) -> &Arc<dyn Annotator> {
        match self.registry.get(language_code) {
            Some(annotator) => annotator,
            None => {
                if language_code == UNKNOWN_LANGUAGE {
                    tracing::debug!(
                        "Language undetected, using '{}' model",
                        self.config.default_language
                    );
                } else {
                    tracing::warn!(
                        "No model for detected language '{}', using '{}' model",
                        language_code,
                        self.config.default_language
                    );
                }
                self.registry.select(&self.config.default_language)
            }
        }
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
