//! Criterion benchmarks for LitLoom.
//!
//! Covers the full analysis pipeline, the individual sections, and spell
//! checking over the bundled example poems.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use litloom::analysis::tokenizer::{Tokenizer, UnicodeTokenizer};
use litloom::poetry::engine::PoemAnalyzer;
use litloom::poetry::rhyme::RhymeAnalyzer;
use litloom::poetry::samples::example_poems;
use litloom::spelling::SpellChecker;

/// Concatenate the example poems into a longer text.
fn generate_long_poem(repeats: usize) -> String {
    let mut stanzas = Vec::with_capacity(repeats * example_poems().len());
    for _ in 0..repeats {
        stanzas.extend(example_poems().iter().copied());
    }
    stanzas.join("\n\n")
}

/// Benchmark the full report.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = PoemAnalyzer::new();

    group.bench_function("analyze_example_poem", |b| {
        b.iter(|| {
            let report = analyzer.analyze(black_box(example_poems()[2]));
            black_box(report)
        })
    });

    let long_poem = generate_long_poem(20);
    group.bench_function("analyze_long_poem", |b| {
        b.iter(|| {
            let report = analyzer.analyze(black_box(&long_poem));
            black_box(report)
        })
    });

    let batch: Vec<String> = (0..64)
        .map(|i| example_poems()[i % example_poems().len()].to_string())
        .collect();
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("analyze_batch", |b| {
        b.iter(|| black_box(analyzer.analyze_batch(black_box(&batch))))
    });

    group.finish();
}

/// Benchmark the individual sections.
fn bench_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("sections");
    let analyzer = PoemAnalyzer::new();
    let tokenizer = UnicodeTokenizer::new();
    let long_poem = generate_long_poem(20);
    let lines = PoemAnalyzer::poem_lines(&long_poem);

    group.bench_function("rhyme_scheme", |b| {
        b.iter(|| black_box(RhymeAnalyzer::new().analyze(black_box(&lines))))
    });

    group.bench_function("tokenize_words", |b| {
        b.iter(|| black_box(tokenizer.tokenize_words(black_box(&long_poem))))
    });

    group.bench_function("figures", |b| {
        b.iter(|| black_box(analyzer.figures(black_box(&long_poem))))
    });

    group.bench_function("tone", |b| {
        b.iter(|| black_box(analyzer.tone(black_box(&long_poem))))
    });

    group.finish();
}

/// Benchmark spell checking.
fn bench_spelling(c: &mut Criterion) {
    let mut group = c.benchmark_group("spelling");
    let checker = SpellChecker::english();

    group.bench_function("check_example_poem", |b| {
        b.iter(|| black_box(checker.check(black_box(example_poems()[1]))))
    });

    group.bench_function("suggest", |b| {
        b.iter(|| black_box(checker.suggest(black_box("daffodills"))))
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_sections, bench_spelling);
criterion_main!(benches);
