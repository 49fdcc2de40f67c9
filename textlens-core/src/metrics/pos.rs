use std::collections::BTreeMap;

use crate::model::AnnotatedDocument;

/// Token counts keyed by part-of-speech display label
///
/// Whitespace tokens are not counted. Tags outside the closed set are
/// counted under their raw tag.
pub fn pos_distribution(doc: &AnnotatedDocument) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for token in doc.tokens().iter().filter(|t| !t.is_whitespace) {
        *distribution.entry(token.pos.label().to_string()).or_insert(0) += 1;
    }
    distribution
}
