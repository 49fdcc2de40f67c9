//! Stable frequency counting

use std::collections::HashMap;

use crate::model::{AnnotatedDocument, WordFrequency};

/// One counted key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    /// Counted key
    pub key: String,
    /// Occurrences
    pub count: usize,
    /// Token index of the first occurrence
    pub first_index: usize,
}

/// Counter that remembers first-occurrence order
///
/// [`most_common`](Self::most_common) breaks count ties by the order in
/// which keys were first seen, so output is identical across runs.
#[derive(Debug, Default, Clone)]
pub struct StableCounter {
    entries: Vec<CountEntry>,
    index: HashMap<String, usize>,
}

impl StableCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key` found at token `token_index`
    pub fn add(&mut self, key: String, token_index: usize) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(CountEntry {
                    key,
                    count: 1,
                    first_index: token_index,
                });
            }
        }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `key`, zero when unseen
    pub fn count(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Up to `limit` entries, descending by count, ties in first-seen order
    pub fn most_common(&self, limit: usize) -> Vec<&CountEntry> {
        let mut ranked: Vec<&CountEntry> = self.entries.iter().collect();
        // sort_by is stable, entries are already in first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

/// Most frequent lemmas among alphabetic non-stop-word tokens
pub fn word_frequencies(doc: &AnnotatedDocument, limit: usize) -> Vec<WordFrequency> {
    let mut counter = StableCounter::new();
    for (i, token) in doc.tokens().iter().enumerate() {
        if token.is_alphabetic && !token.is_stopword {
            counter.add(token.normalized_lemma(), i);
        }
    }

    counter
        .most_common(limit)
        .into_iter()
        .map(|entry| WordFrequency::new(entry.key.clone(), entry.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotatedToken, PartOfSpeech};

    fn noun(text: &str) -> AnnotatedToken {
        AnnotatedToken::word(text, text.to_lowercase(), PartOfSpeech::Noun)
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut counter = StableCounter::new();
        for (i, key) in ["b", "a", "c", "a", "b", "d"].iter().enumerate() {
            counter.add(key.to_string(), i);
        }

        let keys: Vec<(&str, usize)> = counter
            .most_common(10)
            .into_iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect();
        assert_eq!(keys, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
        assert_eq!(counter.count("a"), 2);
        assert_eq!(counter.count("z"), 0);
        assert_eq!(counter.most_common(0).len(), 0);
    }

    #[test]
    fn test_first_index_is_recorded() {
        let mut counter = StableCounter::new();
        counter.add("x".into(), 4);
        counter.add("x".into(), 9);
        assert_eq!(counter.most_common(1)[0].first_index, 4);
    }

    #[test]
    fn test_word_frequencies_skip_stopwords_and_punctuation() {
        let doc = AnnotatedDocument::new(
            vec![
                noun("Cat"),
                AnnotatedToken::word("the", "the", PartOfSpeech::Determiner).stopword(),
                noun("dog"),
                AnnotatedToken::punctuation("."),
                noun("cat"),
                AnnotatedToken::word("the", "the", PartOfSpeech::Determiner).stopword(),
            ],
            vec![],
            vec![],
        );

        assert_eq!(
            word_frequencies(&doc, 10),
            vec![WordFrequency::new("cat", 2), WordFrequency::new("dog", 1)]
        );
        assert_eq!(word_frequencies(&doc, 1), vec![WordFrequency::new("cat", 2)]);
    }
}
