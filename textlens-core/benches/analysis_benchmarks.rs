//! Performance benchmarks for the analysis pipeline
//!
//! Run with: cargo bench --bench analysis_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use textlens_core::annotator::{Annotator, LexiconAnnotator};
use textlens_core::language::embedded_config;
use textlens_core::{metrics, readability, TextAnalyzer};

/// Generate test text of specified size
fn generate_text(base_sentence: &str, size: usize) -> String {
    let repeat_count = size / base_sentence.len() + 1;
    let mut text = base_sentence.repeat(repeat_count);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

const ENGLISH: &str = "The committee met in London on Monday. Members discussed the budget carefully. ";
const PORTUGUESE: &str = "O Brasil é um país enorme. A vida nas cidades é muito agitada. ";

/// Benchmark the whole pipeline per language
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = TextAnalyzer::new().unwrap();

    for (name, base) in [("en", ENGLISH), ("pt", PORTUGUESE)] {
        for size in [1024, 10_240, 102_400] {
            let text = generate_text(base, size);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| analyzer.analyze(black_box(text)).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark annotation alone against the metric passes
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let annotator = LexiconAnnotator::from_config(embedded_config("en").unwrap()).unwrap();
    let text = generate_text(ENGLISH, 102_400);
    let doc = annotator.annotate(&text).unwrap();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("annotate", |b| {
        b.iter(|| annotator.annotate(black_box(&text)).unwrap());
    });
    group.bench_function("metrics", |b| {
        b.iter(|| {
            let doc = black_box(&doc);
            (
                metrics::statistics(doc),
                metrics::keywords(doc, 7),
                metrics::word_frequencies(doc, 10),
                metrics::pos_distribution(doc),
                metrics::named_entities(doc),
            )
        });
    });
    group.bench_function("readability", |b| {
        b.iter(|| readability::score(black_box(&text)));
    });

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_stages);
criterion_main!(benches);
