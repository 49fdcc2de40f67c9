//! Language detection
//!
//! Detection never fails: every failure mode (empty input, too few words,
//! too little evidence, a tie between languages) collapses to
//! [`UNKNOWN_LANGUAGE`].

use std::collections::HashSet;

use crate::language::config::LanguageConfig;
use crate::language::loader::embedded_configs;

/// Language code reported when detection cannot decide
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Guesses the language code of a text
pub trait LanguageDetector: Send + Sync {
    /// Best-guess language code, or [`UNKNOWN_LANGUAGE`]
    fn detect(&self, text: &str) -> String;
}

#[derive(Debug, Clone)]
struct LanguageProfile {
    code: String,
    words: HashSet<String>,
    chars: HashSet<char>,
}

impl LanguageProfile {
    /// Profiles use the configured words only. Bundled stop-word lists
    /// share short words across languages and would blur the scores.
    fn from_config(config: &LanguageConfig) -> Self {
        let words = config
            .stopwords
            .words
            .iter()
            .chain(config.detection.markers.iter())
            .map(|w| w.to_lowercase())
            .collect();

        Self {
            code: config.code().to_string(),
            words,
            chars: config.detection.chars.iter().copied().collect(),
        }
    }
}

/// Stop-word and marker profile detector
///
/// Each profile scores one point per word found in its configured
/// stop-words or marker words and two points per distinctive character.
/// The best profile wins only if it beats the runner-up and its word hits
/// cover at least `min_coverage` of the words, so text in a language
/// without a profile comes out as [`UNKNOWN_LANGUAGE`].
#[derive(Debug, Clone)]
pub struct ProfileDetector {
    profiles: Vec<LanguageProfile>,
    min_words: usize,
    min_coverage: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Score {
    word_hits: usize,
    char_hits: usize,
}

impl Score {
    fn total(&self) -> usize {
        self.word_hits + 2 * self.char_hits
    }
}

impl ProfileDetector {
    /// Default minimum number of alphabetic words before guessing
    pub const DEFAULT_MIN_WORDS: usize = 2;

    /// Default share of words that must hit the winning profile
    pub const DEFAULT_MIN_COVERAGE: f64 = 0.2;

    /// Build profiles from language configurations
    pub fn new<'a>(configs: impl IntoIterator<Item = &'a LanguageConfig>) -> Self {
        Self {
            profiles: configs.into_iter().map(LanguageProfile::from_config).collect(),
            min_words: Self::DEFAULT_MIN_WORDS,
            min_coverage: Self::DEFAULT_MIN_COVERAGE,
        }
    }

    /// Detector over the embedded languages
    pub fn builtin() -> Self {
        Self::new(embedded_configs())
    }

    /// Set the minimum word count required to guess
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the share of words (0.0 to 1.0) the winning profile must cover
    pub fn with_min_coverage(mut self, min_coverage: f64) -> Self {
        self.min_coverage = min_coverage.clamp(0.0, 1.0);
        self
    }

    /// Add or replace the profile for a language
    pub fn add_language(&mut self, config: &LanguageConfig) {
        let profile = LanguageProfile::from_config(config);
        self.profiles.retain(|p| p.code != profile.code);
        self.profiles.push(profile);
    }

    /// Codes of the profiled languages
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.code.as_str())
    }

    fn scores(&self, text: &str) -> (Vec<Score>, usize) {
        let mut scores = vec![Score::default(); self.profiles.len()];
        let mut word_count = 0;

        for word in text
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
        {
            word_count += 1;
            let lower = word.to_lowercase();
            for (score, profile) in scores.iter_mut().zip(&self.profiles) {
                if profile.words.contains(&lower) {
                    score.word_hits += 1;
                }
            }
        }

        for ch in text.chars().flat_map(char::to_lowercase) {
            for (score, profile) in scores.iter_mut().zip(&self.profiles) {
                if profile.chars.contains(&ch) {
                    score.char_hits += 1;
                }
            }
        }

        (scores, word_count)
    }
}

impl Default for ProfileDetector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageDetector for ProfileDetector {
    fn detect(&self, text: &str) -> String {
        let (scores, word_count) = self.scores(text);
        if word_count < self.min_words.max(1) {
            return UNKNOWN_LANGUAGE.to_string();
        }

        let mut ranked: Vec<(Score, &str)> = scores
            .into_iter()
            .zip(self.profiles.iter().map(|p| p.code.as_str()))
            .collect();
        ranked.sort_by(|a, b| b.0.total().cmp(&a.0.total()));

        let [(best, code), rest @ ..] = ranked.as_slice() else {
            return UNKNOWN_LANGUAGE.to_string();
        };
        let total = best.total();
        if total == 0 || rest.first().is_some_and(|r| r.0.total() >= total) {
            return UNKNOWN_LANGUAGE.to_string();
        }

        let coverage = best.word_hits as f64 / word_count as f64;
        if coverage < self.min_coverage {
            tracing::debug!(
                "Best guess {code} covers {:.0}% of {word_count} words, below the {:.0}% minimum",
                coverage * 100.0,
                self.min_coverage * 100.0
            );
            return UNKNOWN_LANGUAGE.to_string();
        }

        tracing::debug!("Detected language {code} (score {total}, {word_count} words)");
        code.to_string()
    }
}
