//! End-to-end tests for the analysis pipeline

use std::sync::Arc;
use std::thread;

use textlens_core::annotator::AnnotatorRegistry;
use textlens_core::language::embedded_config;
use textlens_core::*;

#[test]
fn test_portuguese_text() {
    let text = "Hoje é um dia muito bom. A vida é boa!";
    let result = analyze_text(text).unwrap().unwrap();

    assert_eq!(result.language_code, "pt");
    assert_eq!(result.statistics.total_words, 10);
    assert_eq!(result.statistics.total_sentences, 2);
    assert_eq!(result.statistics.avg_words_per_sentence, 5.0);
    assert_eq!(result.reading_time_minutes, 0.08);
    assert_eq!(result.readability_grade, ReadabilityGrade::Easy);
    assert_eq!(result.text_excerpt, text);
    assert!(result.named_entities.is_none());
}

#[test]
fn test_proper_noun_keyword_keeps_capitalization() {
    let text = "O Brasil é um país enorme. O Brasil tem muitas praias. Eu amo o Brasil.";
    let result = analyze_text(text).unwrap().unwrap();

    assert_eq!(result.language_code, "pt");
    assert_eq!(result.keywords[0], "Brasil");
    assert!(!result.keywords.contains(&"brasil".to_string()));
    assert_eq!(
        result.word_frequencies[0],
        WordFrequency::new("brasil", 3)
    );

    let entities = result.named_entities.unwrap();
    assert_eq!(entities["Location"], vec!["Brasil"]);
}

#[test]
fn test_portuguese_function_words_are_not_frequent_words() {
    let text = "Ele ainda está sobre a mesa. Ela sempre pode ter tudo onde quiser. \
                Ainda sobre isso, sempre.";
    let result = analyze_text(text).unwrap().unwrap();

    assert_eq!(result.language_code, "pt");
    let words: Vec<&str> = result
        .word_frequencies
        .iter()
        .map(|f| f.word.as_str())
        .collect();
    for stopword in ["ainda", "sobre", "sempre"] {
        assert!(!words.contains(&stopword), "{stopword} in {words:?}");
    }
    assert!(words.contains(&"mesa"));
}

#[test]
fn test_english_contractions_keep_their_stems() {
    let text = "I don't know why it's broken. We can't fix John's car.";
    let result = analyze_text(text).unwrap().unwrap();

    assert_eq!(result.statistics.total_words, 11);
    assert_eq!(result.statistics.total_sentences, 2);
    assert!(result.keywords.contains(&"John".to_string()));
    let entities = result.named_entities.unwrap();
    assert_eq!(entities["Person"], vec!["John"]);
}

#[test]
fn test_english_text() {
    let text = "The United States and Brazil signed a trade agreement in Washington. \
                Officials from both countries praised the agreement.";
    let result = analyze_text(text).unwrap().unwrap();

    assert_eq!(result.language_code, "en");
    assert_eq!(result.statistics.total_sentences, 2);
    assert!(result.statistics.unique_words <= result.statistics.total_words);

    assert_eq!(result.keywords.len(), 7);
    assert_eq!(result.keywords[0], "agreement");
    assert!(result.keywords.contains(&"Brazil".to_string()));
    assert_eq!(
        result.word_frequencies[0],
        WordFrequency::new("agreement", 2)
    );

    let entities = result.named_entities.unwrap();
    assert_eq!(
        entities["Geopolitical Entity"],
        vec!["Brazil", "United States", "Washington"]
    );

    assert_eq!(result.pos_distribution["Determiner"], 4);
    assert_eq!(result.pos_distribution["Punctuation"], 2);
}

#[test]
fn test_empty_input_returns_none() {
    assert!(analyze_text("").unwrap().is_none());
    assert!(analyze_text("   ").unwrap().is_none());
    assert!(analyze_text("\n\t\n").unwrap().is_none());
}

#[test]
fn test_undetected_language_uses_default_model() {
    let result = analyze_text("xyzzy plugh").unwrap().unwrap();
    assert_eq!(result.language_code, UNKNOWN_LANGUAGE);
    assert_eq!(result.statistics.total_words, 2);
    assert_eq!(result.statistics.total_sentences, 1);
    assert_eq!(result.readability_grade, ReadabilityGrade::Undefined);
}

#[test]
fn test_long_text_excerpt_is_truncated() {
    let text = "word ".repeat(200);
    let result = analyze_text(&text).unwrap().unwrap();

    assert_eq!(result.text_excerpt.chars().count(), 503);
    assert!(result.text_excerpt.ends_with("..."));
    assert!(text.starts_with(result.text_excerpt.trim_end_matches("...")));
}

#[test]
fn test_custom_limits() {
    let config = PipelineConfig::builder()
        .keyword_limit(2)
        .frequency_limit(1)
        .words_per_minute(13.0)
        .excerpt_chars(5)
        .build()
        .unwrap();
    let analyzer = TextAnalyzer::with_config(config).unwrap();

    let result = analyzer
        .analyze("Cats chase mice. Dogs chase cats. Birds watch dogs.")
        .unwrap()
        .unwrap();

    assert_eq!(result.keywords.len(), 2);
    assert_eq!(result.word_frequencies.len(), 1);
    assert_eq!(result.statistics.total_words, 9);
    assert_eq!(result.reading_time_minutes, 0.69);
    assert_eq!(result.text_excerpt, "Cats ...");
}

#[test]
fn test_external_language_config() {
    let config = LanguageConfig::from_toml_str(
        r#"
[metadata]
code = "xx"
name = "Testish"

[stopwords]
words = ["zork"]

[sentences]
terminators = ["."]
"#,
    )
    .unwrap();

    let registry = AnnotatorRegistry::builder()
        .register(LexiconAnnotator::from_config(embedded_config("en").unwrap()).unwrap())
        .register(LexiconAnnotator::from_config(&config).unwrap())
        .build()
        .unwrap();

    let mut detector = ProfileDetector::builtin();
    detector.add_language(&config);

    let analyzer = TextAnalyzer::from_parts(
        Arc::new(registry),
        Arc::new(detector),
        PipelineConfig::default(),
    )
    .unwrap();

    let result = analyzer.analyze("zork zork blip.").unwrap().unwrap();
    assert_eq!(result.language_code, "xx");
    assert_eq!(result.statistics.total_words, 3);
    assert_eq!(result.word_frequencies, vec![WordFrequency::new("blip", 1)]);
}

#[test]
fn test_concurrent_analysis_shares_models() {
    let analyzer = Arc::new(TextAnalyzer::new().unwrap());
    let texts = [
        "Hoje é um dia muito bom. A vida é boa!",
        "The weather is lovely today. We walked along the river.",
    ];
    let expected: Vec<AnalysisResult> = texts
        .iter()
        .map(|t| analyzer.analyze(t).unwrap().unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let analyzer = Arc::clone(&analyzer);
            let text = texts[i % texts.len()];
            thread::spawn(move || analyzer.analyze(text).unwrap().unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), expected[i % texts.len()]);
    }
}

#[test]
fn test_result_serializes_to_json() {
    let result = analyze_text("Hoje é um dia muito bom. A vida é boa!")
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["language_code"], "pt");
    assert_eq!(json["readability_grade"], "Easy");
    assert_eq!(json["statistics"]["total_words"], 10);
    assert!(json["named_entities"].is_null());

    let back: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.keywords, result.keywords);
    assert_eq!(back.statistics.total_sentences, 2);
}
