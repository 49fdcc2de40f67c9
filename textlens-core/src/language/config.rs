//! Configuration structures and validation
//!
//! This module defines the TOML schema for a language model: stop-words,
//! closed-class lexicon, suffix morphology, sentence rules, entity rules
//! and detection markers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::stopwords::bundled_stopwords;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub stopwords: Stopwords,
    #[serde(default)]
    pub lexicon: Lexicon,
    #[serde(default)]
    pub morphology: Morphology,
    pub sentences: Sentences,
    #[serde(default)]
    pub entities: Entities,
    #[serde(default)]
    pub detection: Detection,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Stop-words (matched lowercase)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwords {
    /// Start from the bundled list for the language code
    #[serde(default = "default_bundled")]
    pub bundled: bool,
    /// Words added to the bundled list
    #[serde(default)]
    pub words: Vec<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self {
            bundled: default_bundled(),
            words: Vec::new(),
        }
    }
}

/// Closed-class lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Words keyed by coarse POS tag
    #[serde(default)]
    pub tags: HashMap<String, Vec<String>>,
    /// Irregular lemmas, surface form (lowercase) to lemma
    #[serde(default)]
    pub lemmas: HashMap<String, String>,
    /// Endings split off words as tokens of their own ("n't", "'s")
    #[serde(default)]
    pub clitics: Vec<Clitic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clitic {
    /// Surface form, matched lowercase with either apostrophe
    pub form: String,
    pub tag: String,
    /// Defaults to the form
    #[serde(default)]
    pub lemma: Option<String>,
}

/// Suffix-driven morphology
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Morphology {
    /// Applied in order; the first match wins
    #[serde(default)]
    pub lemma_rules: Vec<LemmaRule>,
    /// Applied in order to open-class words; the first match wins
    #[serde(default)]
    pub pos_rules: Vec<PosRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaRule {
    pub suffix: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
    /// Collapse a doubled final consonant left after stripping
    #[serde(default)]
    pub undouble: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosRule {
    pub suffix: String,
    pub tag: String,
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
}

/// Sentence segmentation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    pub terminators: Vec<char>,
    /// Words that do not end a sentence when followed by a dot
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

/// Entity rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entities {
    /// Label for proper-noun runs missing from the gazetteer
    #[serde(default = "default_entity_label")]
    pub default_label: String,
    /// Lowercase words allowed between proper nouns of one entity
    #[serde(default)]
    pub connectors: Vec<String>,
    /// Known names keyed by entity label
    #[serde(default)]
    pub gazetteer: HashMap<String, Vec<String>>,
}

impl Default for Entities {
    fn default() -> Self {
        Self {
            default_label: default_entity_label(),
            connectors: Vec::new(),
            gazetteer: HashMap::new(),
        }
    }
}

/// Language detection markers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detection {
    /// Distinctive words (lowercase), counted like stop-words
    #[serde(default)]
    pub markers: Vec<String>,
    /// Distinctive characters, weighted double
    #[serde(default)]
    pub chars: Vec<char>,
}

fn default_bundled() -> bool {
    true
}

fn default_min_stem() -> usize {
    2
}

fn default_entity_label() -> String {
    "MISC".to_string()
}

impl LanguageConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    /// Language name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Effective stop-words: the bundled list (if enabled) plus `stopwords.words`
    pub fn stopword_set(&self) -> HashSet<String> {
        let mut set: HashSet<String> = if self.stopwords.bundled {
            bundled_stopwords(self.code()).into_iter().collect()
        } else {
            HashSet::new()
        };
        set.extend(self.stopwords.words.iter().map(|w| w.to_lowercase()));
        set
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidLanguageConfig {
            code: self.metadata.code.clone(),
            reason: reason.to_string(),
        };

        if self.metadata.code.trim().is_empty() {
            return Err(invalid("language code must not be empty"));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(invalid("language name must not be empty"));
        }

        if self.sentences.terminators.is_empty() {
            return Err(invalid("no terminator characters defined"));
        }

        if self.morphology.lemma_rules.iter().any(|r| r.suffix.is_empty()) {
            return Err(invalid("lemma rule with empty suffix"));
        }

        if self.morphology.pos_rules.iter().any(|r| r.suffix.is_empty()) {
            return Err(invalid("POS rule with empty suffix"));
        }

        if self.lexicon.clitics.iter().any(|c| c.form.trim().is_empty()) {
            return Err(invalid("clitic with empty form"));
        }

        if self.entities.default_label.trim().is_empty() {
            return Err(invalid("entity default label must not be empty"));
        }

        Ok(())
    }
}
