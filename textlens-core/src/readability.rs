//! Readability Scorer
//!
//! A Gulpease-style score computed from raw characters, independent of
//! annotation:
//!
//! ```text
//! score = 89 + (300 * terminators - 10 * letters) / words
//! ```
//!
//! `words` counts whitespace-delimited chunks, which is a cruder measure
//! than the alphabetic-token count used by the statistics facet.

use serde::{Deserialize, Serialize};

use crate::model::ReadabilityGrade;

/// Characters counted as sentence terminators, each occurrence separately
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Lowest score graded [`ReadabilityGrade::Easy`]
pub const EASY_THRESHOLD: f64 = 80.0;

/// Lowest score graded [`ReadabilityGrade::Medium`]
pub const MEDIUM_THRESHOLD: f64 = 60.0;

/// Counts and score behind a readability grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Alphabetic characters
    pub letters: usize,
    /// Whitespace-delimited chunks
    pub words: usize,
    /// Occurrences of `.`, `!` and `?`
    pub terminators: usize,
    /// Raw score; `None` when there are no words or no terminators
    pub score: Option<f64>,
    /// Grade derived from the score
    pub grade: ReadabilityGrade,
}

/// Score `text`
pub fn score(text: &str) -> ReadabilityReport {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    let words = text.split_whitespace().count();
    let terminators = text.chars().filter(|c| TERMINATORS.contains(c)).count();

    let score = if words == 0 || terminators == 0 {
        None
    } else {
        Some(89.0 + (300.0 * terminators as f64 - 10.0 * letters as f64) / words as f64)
    };

    let grade = match score {
        None => ReadabilityGrade::Undefined,
        Some(s) if s >= EASY_THRESHOLD => ReadabilityGrade::Easy,
        Some(s) if s >= MEDIUM_THRESHOLD => ReadabilityGrade::Medium,
        Some(_) => ReadabilityGrade::Hard,
    };

    ReadabilityReport {
        letters,
        words,
        terminators,
        score,
        grade,
    }
}

/// Grade `text`
pub fn grade(text: &str) -> ReadabilityGrade {
    score(text).grade
}
