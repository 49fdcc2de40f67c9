//! Analysis result record handed to renderers and exporters

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Surface statistics over alphabetic tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Count of alphabetic tokens
    pub total_words: usize,
    /// Count of sentence spans
    pub total_sentences: usize,
    /// Distinct lowercased lemmas among alphabetic tokens
    pub unique_words: usize,
    /// `total_words / total_sentences`, two decimals
    pub avg_words_per_sentence: f64,
    /// Mean character length of alphabetic tokens, two decimals
    pub avg_word_length: f64,
}

/// A lemma and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Lowercased lemma
    pub word: String,
    /// Occurrences among alphabetic non-stop-word tokens
    pub count: usize,
}

impl WordFrequency {
    /// Create a frequency entry
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Coarse difficulty grade derived from the Gulpease-style score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadabilityGrade {
    /// Score of 80 or more
    Easy,
    /// Score in `60..80`
    Medium,
    /// Score under 60
    Hard,
    /// No words or no sentence terminators
    Undefined,
}

impl ReadabilityGrade {
    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadabilityGrade::Easy => "Easy",
            ReadabilityGrade::Medium => "Medium",
            ReadabilityGrade::Hard => "Hard",
            ReadabilityGrade::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for ReadabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured report for one analyzed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected language code, or `"unknown"`
    pub language_code: String,
    /// Surface statistics
    pub statistics: Statistics,
    /// Keywords, most significant first
    pub keywords: Vec<String>,
    /// Most frequent lemmas, descending by count
    pub word_frequencies: Vec<WordFrequency>,
    /// Token counts keyed by part-of-speech label
    pub pos_distribution: BTreeMap<String, usize>,
    /// Sorted, deduplicated entity texts keyed by entity-type label;
    /// `None` when the text has no entities
    pub named_entities: Option<BTreeMap<String, Vec<String>>>,
    /// Estimated reading time in minutes
    pub reading_time_minutes: f64,
    /// Readability grade of the raw text
    pub readability_grade: ReadabilityGrade,
    /// Leading characters of the input, with `...` appended when cut
    pub text_excerpt: String,
}
