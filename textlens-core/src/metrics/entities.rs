use std::collections::{BTreeMap, BTreeSet};

use crate::model::AnnotatedDocument;

/// Entity texts grouped by entity-type display label
///
/// Each group is deduplicated by exact text and sorted. Returns `None`
/// when no entity with non-blank text exists.
pub fn named_entities(doc: &AnnotatedDocument) -> Option<BTreeMap<String, Vec<String>>> {
    let mut groups: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for entity in doc.entities() {
        if entity.text.trim().is_empty() {
            continue;
        }
        groups
            .entry(entity.label.display_label().to_string())
            .or_default()
            .insert(entity.text.as_str());
    }

    if groups.is_empty() {
        return None;
    }

    Some(
        groups
            .into_iter()
            .map(|(label, texts)| (label, texts.into_iter().map(str::to_string).collect()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntitySpan;

    fn doc_with(entities: Vec<EntitySpan>) -> AnnotatedDocument {
        AnnotatedDocument::new(vec![], vec![], entities)
    }

    #[test]
    fn test_no_entities_is_none() {
        assert_eq!(named_entities(&doc_with(vec![])), None);
        assert_eq!(
            named_entities(&doc_with(vec![EntitySpan::new("  ", "ORG")])),
            None
        );
    }

    #[test]
    fn test_grouped_sorted_and_deduplicated() {
        let entities = named_entities(&doc_with(vec![
            EntitySpan::new("Paris", "GPE"),
            EntitySpan::new("Google", "ORG"),
            EntitySpan::new("Berlin", "GPE"),
            EntitySpan::new("Paris", "GPE"),
            EntitySpan::new("paris", "GPE"),
            EntitySpan::new("Zorblax", "ALIEN"),
        ]))
        .unwrap();

        assert_eq!(
            entities["Geopolitical Entity"],
            vec!["Berlin", "Paris", "paris"]
        );
        assert_eq!(entities["Organization"], vec!["Google"]);
        assert_eq!(entities["ALIEN"], vec!["Zorblax"]);
        assert_eq!(entities.len(), 3);
    }
}
