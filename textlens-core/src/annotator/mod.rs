//! Linguistic annotation
//!
//! The pipeline consumes annotation through the [`Annotator`] trait and
//! picks a model per language from an [`AnnotatorRegistry`]. The bundled
//! [`LexiconAnnotator`] implements the trait from a language
//! configuration; any other tagger can be registered in its place.

pub mod lexicon;
pub mod registry;
pub mod tokenizer;

use crate::error::Result;
use crate::model::AnnotatedDocument;

pub use lexicon::LexiconAnnotator;
pub use registry::{AnnotatorRegistry, AnnotatorRegistryBuilder};

/// Produces an annotated document from raw text in one language
///
/// Implementations must be deterministic for a given input and safe to
/// share across threads.
pub trait Annotator: Send + Sync {
    /// Language code the model was built for
    fn language_code(&self) -> &str;

    /// Tokenize, tag and segment `text`
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument>;
}
