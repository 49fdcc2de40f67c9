//! Data model shared by the annotator, the metrics engine and renderers

mod document;
mod result;
mod token;

pub use document::{AnnotatedDocument, EntitySpan, EntityType, SentenceSpan};
pub use result::{AnalysisResult, ReadabilityGrade, Statistics, WordFrequency};
pub use token::{AnnotatedToken, PartOfSpeech};
