use std::collections::HashSet;

use super::round2;
use crate::model::{AnnotatedDocument, Statistics};

/// Surface statistics over the alphabetic tokens of a document
pub fn statistics(doc: &AnnotatedDocument) -> Statistics {
    let mut total_words = 0usize;
    let mut total_chars = 0usize;
    let mut lemmas = HashSet::new();

    for token in doc.alphabetic_tokens() {
        total_words += 1;
        total_chars += token.text.chars().count();
        lemmas.insert(token.normalized_lemma());
    }

    let total_sentences = doc.sentences().len();

    let avg_words_per_sentence = if total_sentences == 0 {
        0.0
    } else {
        round2(total_words as f64 / total_sentences as f64)
    };

    let avg_word_length = if total_words == 0 {
        0.0
    } else {
        round2(total_chars as f64 / total_words as f64)
    };

    Statistics {
        total_words,
        total_sentences,
        unique_words: lemmas.len(),
        avg_words_per_sentence,
        avg_word_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotatedToken, PartOfSpeech, SentenceSpan};

    #[test]
    fn test_empty_document() {
        let stats = statistics(&AnnotatedDocument::default());
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_counts_and_averages() {
        let doc = AnnotatedDocument::new(
            vec![
                AnnotatedToken::word("Cats", "cat", PartOfSpeech::Noun),
                AnnotatedToken::word("cat", "cat", PartOfSpeech::Noun),
                AnnotatedToken::word("ran", "run", PartOfSpeech::Verb),
                AnnotatedToken::punctuation("."),
                AnnotatedToken::word("42", "42", PartOfSpeech::Numeral),
                AnnotatedToken::punctuation("!"),
            ],
            vec![SentenceSpan::new(0, 4), SentenceSpan::new(4, 6)],
            vec![],
        );

        let stats = statistics(&doc);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.total_sentences, 2);
        assert_eq!(stats.unique_words, 2);
        assert_eq!(stats.avg_words_per_sentence, 1.5);
        assert_eq!(stats.avg_word_length, 3.33);
    }

    #[test]
    fn test_words_without_sentences() {
        let doc = AnnotatedDocument::new(
            vec![AnnotatedToken::word("word", "word", PartOfSpeech::Noun)],
            vec![],
            vec![],
        );
        let stats = statistics(&doc);
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.avg_words_per_sentence, 0.0);
        assert_eq!(stats.avg_word_length, 4.0);
    }
}
