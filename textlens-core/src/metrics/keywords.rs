use super::frequency::StableCounter;
use crate::model::{AnnotatedDocument, PartOfSpeech};

/// Most frequent noun, proper-noun and verb lemmas
///
/// Each chosen lemma is displayed through the first candidate token that
/// carries it: proper nouns keep their surface form, everything else is
/// shown as the lowercased lemma.
pub fn keywords(doc: &AnnotatedDocument, limit: usize) -> Vec<String> {
    let tokens = doc.tokens();

    let mut counter = StableCounter::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.pos.is_keyword_class() && token.is_alphabetic && !token.is_stopword {
            counter.add(token.normalized_lemma(), i);
        }
    }

    counter
        .most_common(limit)
        .into_iter()
        .map(|entry| {
            let representative = &tokens[entry.first_index];
            if representative.pos == PartOfSpeech::ProperNoun {
                representative.text.clone()
            } else {
                entry.key.clone()
            }
        })
        .collect()
}
