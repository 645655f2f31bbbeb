//! Benchmarks for shortcode extraction and catalog assembly.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mojigrid::catalog::Catalog;
use mojigrid::remote::EmojiMap;
use mojigrid::shortcode;

fn large_source() -> String {
    let mut md = String::from("# Emojis\n\n| Type | Emoji |\n|------|-------|\n");
    for i in 0..500 {
        md.push_str(&format!("| kind{i} | :code{i}: |\n"));
    }
    md
}

fn bench_extract_small(c: &mut Criterion) {
    let md = "Use :sparkles: for features and :bug: for fixes, :+1: approves.";
    c.bench_function("extract_small", |b| {
        b.iter(|| shortcode::extract(black_box(md)))
    });
}

fn bench_extract_large(c: &mut Criterion) {
    let md = large_source();
    c.bench_function("extract_large", |b| {
        b.iter(|| shortcode::extract(black_box(&md)))
    });
}

fn bench_assemble_large(c: &mut Criterion) {
    let md = large_source();
    let map: EmojiMap = (0..500)
        .map(|i| (format!("code{i}"), format!("https://img.example/{i}.png")))
        .collect();
    c.bench_function("assemble_large", |b| {
        b.iter(|| Catalog::assemble(black_box(&md), black_box(&map)))
    });
}

criterion_group!(
    benches,
    bench_extract_small,
    bench_extract_large,
    bench_assemble_large
);
criterion_main!(benches);
