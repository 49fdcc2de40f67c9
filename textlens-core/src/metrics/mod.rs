//! Metrics Engine
//!
//! Pure functions over an [`AnnotatedDocument`](crate::model::AnnotatedDocument),
//! each producing one facet of the analysis result. No facet depends on
//! another, so they can be computed in any order.

pub mod entities;
pub mod frequency;
pub mod keywords;
pub mod pos;
pub mod statistics;

pub use entities::named_entities;
pub use frequency::{word_frequencies, StableCounter};
pub use keywords::keywords;
pub use pos::pos_distribution;
pub use statistics::statistics;

/// Default reading speed in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 130.0;

/// Default number of keywords
pub const DEFAULT_KEYWORD_LIMIT: usize = 7;

/// Default number of frequency entries
pub const DEFAULT_FREQUENCY_LIMIT: usize = 10;

/// Round half away from zero to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated reading time in minutes, two decimals
///
/// A non-positive or non-finite speed yields zero.
pub fn reading_time_minutes(total_words: usize, words_per_minute: f64) -> f64 {
    if !words_per_minute.is_finite() || words_per_minute <= 0.0 {
        return 0.0;
    }
    round2(total_words as f64 / words_per_minute)
}
