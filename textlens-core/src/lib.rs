//! Text analysis pipeline
//!
//! This crate turns raw text into a structured linguistic report:
//! detected language, surface statistics, keywords, word frequencies,
//! part-of-speech distribution, named entities, reading time and a
//! readability grade.
//!
//! # Architecture
//!
//! - **Language**: data-driven language models and the language detector
//! - **Annotator**: tokenization, tagging, lemmas, sentences and entities
//!   behind the [`Annotator`] trait, selected per language from an
//!   [`AnnotatorRegistry`]
//! - **Metrics**: pure functions over an annotated document
//! - **Readability**: a character-level score over the raw text
//! - **Pipeline**: [`TextAnalyzer`] sequencing the above into one
//!   [`AnalysisResult`]
//!
//! # Example
//!
//! ```rust
//! use textlens_core::{ReadabilityGrade, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//! let result = analyzer
//!     .analyze("Hoje é um dia muito bom. A vida é boa!")
//!     .unwrap()
//!     .expect("non-empty input");
//!
//! assert_eq!(result.language_code, "pt");
//! assert_eq!(result.statistics.total_sentences, 2);
//! assert_eq!(result.readability_grade, ReadabilityGrade::Easy);
//!
//! // Blank input has nothing to analyze
//! assert!(analyzer.analyze("   ").unwrap().is_none());
//! ```

pub mod annotator;
pub mod error;
pub mod language;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod readability;

pub use annotator::{Annotator, AnnotatorRegistry, LexiconAnnotator};
pub use error::{Error, Result};
pub use language::{LanguageConfig, LanguageDetector, ProfileDetector, UNKNOWN_LANGUAGE};
pub use model::{
    AnalysisResult, AnnotatedDocument, AnnotatedToken, EntitySpan, EntityType, PartOfSpeech,
    ReadabilityGrade, SentenceSpan, Statistics, WordFrequency,
};
pub use pipeline::{PipelineConfig, TextAnalyzer};
pub use readability::ReadabilityReport;

/// Analyze `text` with the embedded languages and default settings
///
/// Builds a fresh [`TextAnalyzer`] per call; keep an analyzer around when
/// analyzing many texts.
pub fn analyze_text(text: &str) -> Result<Option<AnalysisResult>> {
    TextAnalyzer::new()?.analyze(text)
}
