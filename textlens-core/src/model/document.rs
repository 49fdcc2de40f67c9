//! Annotated documents: tokens, sentence spans and entity spans

use super::token::AnnotatedToken;
use std::fmt;
use std::ops::Range;

/// Contiguous token range forming one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Index of the first token
    pub start: usize,
    /// One past the index of the last token
    pub end: usize,
}

impl SentenceSpan {
    /// Create a span over `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Token index range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named-entity type label (open set)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// `PERSON` or `PER`
    Person,
    /// `NORP`
    NationalityOrGroup,
    /// `FAC`
    Facility,
    /// `ORG`
    Organization,
    /// `GPE`
    GeopoliticalEntity,
    /// `LOC`
    Location,
    /// `PRODUCT`
    Product,
    /// `EVENT`
    Event,
    /// `WORK_OF_ART`
    WorkOfArt,
    /// `LAW`
    Law,
    /// `LANGUAGE`
    Language,
    /// `DATE`
    Date,
    /// `TIME`
    Time,
    /// `PERCENT`
    Percent,
    /// `MONEY`
    Money,
    /// `QUANTITY`
    Quantity,
    /// `ORDINAL`
    Ordinal,
    /// `CARDINAL`
    Cardinal,
    /// `MISC`
    Miscellaneous,
    /// Label outside the table, kept verbatim
    Unrecognized(String),
}

impl EntityType {
    /// Parse an annotator label
    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" | "PER" => EntityType::Person,
            "NORP" => EntityType::NationalityOrGroup,
            "FAC" => EntityType::Facility,
            "ORG" => EntityType::Organization,
            "GPE" => EntityType::GeopoliticalEntity,
            "LOC" => EntityType::Location,
            "PRODUCT" => EntityType::Product,
            "EVENT" => EntityType::Event,
            "WORK_OF_ART" => EntityType::WorkOfArt,
            "LAW" => EntityType::Law,
            "LANGUAGE" => EntityType::Language,
            "DATE" => EntityType::Date,
            "TIME" => EntityType::Time,
            "PERCENT" => EntityType::Percent,
            "MONEY" => EntityType::Money,
            "QUANTITY" => EntityType::Quantity,
            "ORDINAL" => EntityType::Ordinal,
            "CARDINAL" => EntityType::Cardinal,
            "MISC" => EntityType::Miscellaneous,
            other => EntityType::Unrecognized(other.to_string()),
        }
    }

    /// Human-readable label; unrecognized labels pass through unchanged
    pub fn display_label(&self) -> &str {
        match self {
            EntityType::Person => "Person",
            EntityType::NationalityOrGroup => "Nationality or Group",
            EntityType::Facility => "Facility",
            EntityType::Organization => "Organization",
            EntityType::GeopoliticalEntity => "Geopolitical Entity",
            EntityType::Location => "Location",
            EntityType::Product => "Product",
            EntityType::Event => "Event",
            EntityType::WorkOfArt => "Work of Art",
            EntityType::Law => "Law",
            EntityType::Language => "Language",
            EntityType::Date => "Date",
            EntityType::Time => "Time",
            EntityType::Percent => "Percent",
            EntityType::Money => "Money",
            EntityType::Quantity => "Quantity",
            EntityType::Ordinal => "Ordinal",
            EntityType::Cardinal => "Cardinal",
            EntityType::Miscellaneous => "Miscellaneous",
            EntityType::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

/// A text span referring to a named entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    /// Entity surface text
    pub text: String,
    /// Entity type
    pub label: EntityType,
}

impl EntitySpan {
    /// Create an entity span from an annotator label
    pub fn new(text: impl Into<String>, label: &str) -> Self {
        Self {
            text: text.into(),
            label: EntityType::from_label(label),
        }
    }
}

/// Read-only annotator output for one analysis request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedDocument {
    tokens: Vec<AnnotatedToken>,
    sentences: Vec<SentenceSpan>,
    entities: Vec<EntitySpan>,
}

impl AnnotatedDocument {
    /// Assemble a document from annotator output
    pub fn new(
        tokens: Vec<AnnotatedToken>,
        sentences: Vec<SentenceSpan>,
        entities: Vec<EntitySpan>,
    ) -> Self {
        Self {
            tokens,
            sentences,
            entities,
        }
    }

    /// Tokens in document order
    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Sentence spans in document order
    pub fn sentences(&self) -> &[SentenceSpan] {
        &self.sentences
    }

    /// Entity spans in document order
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Tokens of one sentence
    pub fn sentence_tokens(&self, span: &SentenceSpan) -> &[AnnotatedToken] {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        &self.tokens[start..end]
    }

    /// Alphabetic tokens in document order
    pub fn alphabetic_tokens(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens.iter().filter(|t| t.is_alphabetic)
    }

    /// Number of alphabetic tokens
    pub fn word_count(&self) -> usize {
        self.alphabetic_tokens().count()
    }
}
