//! Bundled stop-word lists
//!
//! Lists come from the `stop-words` crate and are keyed by ISO 639-1
//! code. A language configuration adds its own words on top.

use stop_words::{get, LANGUAGE};

/// Map a language code to its bundled list
fn bundled_language(code: &str) -> Option<LANGUAGE> {
    let language = match code.to_lowercase().as_str() {
        "en" => LANGUAGE::English,
        "pt" => LANGUAGE::Portuguese,
        "de" => LANGUAGE::German,
        "fr" => LANGUAGE::French,
        "es" => LANGUAGE::Spanish,
        "it" => LANGUAGE::Italian,
        "nl" => LANGUAGE::Dutch,
        "ru" => LANGUAGE::Russian,
        "sv" => LANGUAGE::Swedish,
        "no" => LANGUAGE::Norwegian,
        "da" => LANGUAGE::Danish,
        "fi" => LANGUAGE::Finnish,
        "hu" => LANGUAGE::Hungarian,
        "tr" => LANGUAGE::Turkish,
        "pl" => LANGUAGE::Polish,
        "ar" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(language)
}

/// Whether a bundled list exists for `code`
pub fn has_bundled_stopwords(code: &str) -> bool {
    bundled_language(code).is_some()
}

/// Bundled stop-words for `code`, lowercase; empty for codes without a list
pub fn bundled_stopwords(code: &str) -> Vec<String> {
    match bundled_language(code) {
        Some(language) => get(language).iter().map(|s| s.to_lowercase()).collect(),
        None => Vec::new(),
    }
}
