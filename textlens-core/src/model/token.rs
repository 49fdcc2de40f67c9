//! Annotated tokens and the coarse part-of-speech tag set

use std::fmt;

/// Coarse part-of-speech tag (Universal Dependencies style)
///
/// Tags outside the closed set are carried verbatim in
/// [`PartOfSpeech::Unrecognized`] so that counts never lose them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `ADJ`
    Adjective,
    /// `ADP`
    Adposition,
    /// `ADV`
    Adverb,
    /// `AUX`
    Auxiliary,
    /// `CONJ`
    Conjunction,
    /// `CCONJ`
    CoordinatingConjunction,
    /// `DET`
    Determiner,
    /// `INTJ`
    Interjection,
    /// `NOUN`
    Noun,
    /// `NUM`
    Numeral,
    /// `PART`
    Particle,
    /// `PRON`
    Pronoun,
    /// `PROPN`
    ProperNoun,
    /// `PUNCT`
    Punctuation,
    /// `SCONJ`
    SubordinatingConjunction,
    /// `SYM`
    Symbol,
    /// `VERB`
    Verb,
    /// `X`
    Other,
    /// `_`
    Unknown,
    /// Any tag the table does not know, kept as-is
    Unrecognized(String),
}

/// Tag, variant and display label for every member of the closed set
const TAG_TABLE: &[(&str, PartOfSpeech, &str)] = &[
    ("ADJ", PartOfSpeech::Adjective, "Adjective"),
    ("ADP", PartOfSpeech::Adposition, "Preposition"),
    ("ADV", PartOfSpeech::Adverb, "Adverb"),
    ("AUX", PartOfSpeech::Auxiliary, "Auxiliary Verb"),
    ("CONJ", PartOfSpeech::Conjunction, "Conjunction"),
    (
        "CCONJ",
        PartOfSpeech::CoordinatingConjunction,
        "Coordinating Conjunction",
    ),
    ("DET", PartOfSpeech::Determiner, "Determiner"),
    ("INTJ", PartOfSpeech::Interjection, "Interjection"),
    ("NOUN", PartOfSpeech::Noun, "Noun"),
    ("NUM", PartOfSpeech::Numeral, "Number"),
    ("PART", PartOfSpeech::Particle, "Particle"),
    ("PRON", PartOfSpeech::Pronoun, "Pronoun"),
    ("PROPN", PartOfSpeech::ProperNoun, "Proper Noun"),
    ("PUNCT", PartOfSpeech::Punctuation, "Punctuation"),
    (
        "SCONJ",
        PartOfSpeech::SubordinatingConjunction,
        "Subordinating Conjunction",
    ),
    ("SYM", PartOfSpeech::Symbol, "Symbol"),
    ("VERB", PartOfSpeech::Verb, "Verb"),
    ("X", PartOfSpeech::Other, "Other"),
    ("_", PartOfSpeech::Unknown, "Unknown"),
];

impl PartOfSpeech {
    /// Parse a tag; unknown tags become [`PartOfSpeech::Unrecognized`]
    pub fn from_tag(tag: &str) -> Self {
        TAG_TABLE
            .iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, pos, _)| pos.clone())
            .unwrap_or_else(|| PartOfSpeech::Unrecognized(tag.to_string()))
    }

    /// The raw tag string
    pub fn tag(&self) -> &str {
        match self {
            PartOfSpeech::Unrecognized(tag) => tag,
            known => TAG_TABLE
                .iter()
                .find(|(_, pos, _)| pos == known)
                .map(|(t, _, _)| *t)
                .unwrap_or("_"),
        }
    }

    /// Human-readable label; unrecognized tags pass through unchanged
    pub fn label(&self) -> &str {
        match self {
            PartOfSpeech::Unrecognized(tag) => tag,
            known => TAG_TABLE
                .iter()
                .find(|(_, pos, _)| pos == known)
                .map(|(_, _, label)| *label)
                .unwrap_or("Unknown"),
        }
    }

    /// Whether tokens with this tag feed the keyword pool
    pub fn is_keyword_class(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Verb
        )
    }
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One linguistic unit produced by an annotator
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    /// Original surface form
    pub text: String,
    /// Normalized base form
    pub lemma: String,
    /// Coarse grammatical tag
    pub pos: PartOfSpeech,
    /// Every character is alphabetic
    pub is_alphabetic: bool,
    /// High-frequency function word
    pub is_stopword: bool,
    /// Whitespace-only token
    pub is_whitespace: bool,
}

impl AnnotatedToken {
    /// Create a word token; the alphabetic flag is derived from the text
    pub fn word(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        let text = text.into();
        let is_alphabetic = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            is_alphabetic,
            is_stopword: false,
            is_whitespace: false,
        }
    }

    /// Create a punctuation token whose lemma is its text
    pub fn punctuation(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos: PartOfSpeech::Punctuation,
            is_alphabetic: false,
            is_stopword: false,
            is_whitespace: false,
        }
    }

    /// Create a whitespace token
    pub fn whitespace(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos: PartOfSpeech::Unrecognized("SPACE".to_string()),
            is_alphabetic: false,
            is_stopword: false,
            is_whitespace: true,
        }
    }

    /// Mark the token as a stop-word
    pub fn stopword(mut self) -> Self {
        self.is_stopword = true;
        self
    }

    /// Lowercased lemma, falling back to the lowercased surface form
    /// when the annotator left the lemma empty
    pub fn normalized_lemma(&self) -> String {
        if self.lemma.is_empty() {
            self.text.to_lowercase()
        } else {
            self.lemma.to_lowercase()
        }
    }
}
