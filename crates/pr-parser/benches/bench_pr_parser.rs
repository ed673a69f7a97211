use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pr_parser::{parse_text, IpaParser, TranscriptParser};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn generate_transcript(syllables: usize) -> String {
    let pool = ["pa", "ta", "plaʁt", "o", "ia\u{303}", "ʃwa", "ndo", "ŋa", "ku", "sɛl", "bʁi", "ʒɔ\u{303}"];
    let mut rng = StdRng::seed_from_u64(42);
    (0..syllables)
        .map(|_| *pool.choose(&mut rng).unwrap_or(&"a"))
        .collect::<Vec<_>>()
        .join(".")
}

fn bench_parse_text(c: &mut Criterion) {
    let small = generate_transcript(100);
    let large = generate_transcript(10_000);

    c.bench_function("parse_text_100", |b| {
        b.iter(|| black_box(parse_text(black_box(&small)).unwrap()))
    });
    c.bench_function("parse_text_10000", |b| {
        b.iter(|| black_box(parse_text(black_box(&large)).unwrap()))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let parser = IpaParser::new();
    let text = parser.parse_content(&generate_transcript(10_000)).unwrap();
    c.bench_function("serialize_10000", |b| b.iter(|| black_box(text.to_string())));
}

criterion_group!(benches, bench_parse_text, bench_serialize);
criterion_main!(benches);
