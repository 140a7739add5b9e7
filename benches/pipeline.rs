use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use textreuse::{
    compare_sources, FingerprintConfig, NormalizationContext, NormalizeConfig, PipelineConfig,
    SourceDocument, UnicodeSentenceSplitter,
};

const WORDS: &[&str] = &[
    "whale", "harpoon", "captain", "voyage", "ocean", "sailor", "mast", "storm", "island",
    "lantern", "compass", "anchor", "tide", "harbour", "deck", "rigging", "quarter", "oil",
    "bone", "ivory", "spear", "chase", "white", "leviathan", "sermon", "chapel", "inn",
    "blanket", "cannibal", "idol", "pipe", "trade", "wind", "squall", "fog", "crew",
];

/// Deterministic pseudo-prose: `sentences` sentences of 8 to 19 words.
fn generate_text(sentences: usize, seed: usize) -> String {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) % 1_000_003
    };

    let mut text = String::new();
    for _ in 0..sentences {
        let len = 8 + next() % 12;
        for i in 0..len {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(WORDS[next() % WORDS.len()]);
        }
        text.push_str(". ");
    }
    text
}

fn bench_compare(c: &mut Criterion) {
    let ctx = NormalizationContext::with_defaults(NormalizeConfig::default()).expect("context");
    let a = SourceDocument::from_text("a.txt", &generate_text(400, 1));
    // Half borrowed, half fresh.
    let b = SourceDocument::from_text(
        "b.txt",
        &format!("{}{}", generate_text(200, 1), generate_text(200, 2)),
    );

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    group.throughput(Throughput::Bytes((a.text.len() + b.text.len()) as u64));

    for parallel in [false, true] {
        let cfg = PipelineConfig::new(FingerprintConfig::new(10, 5, 3)).with_parallel(parallel);
        let name = if parallel { "compare_parallel" } else { "compare_sequential" };
        group.bench_function(name, |bench| {
            bench.iter(|| {
                compare_sources(
                    black_box(&a),
                    black_box(&b),
                    &UnicodeSentenceSplitter,
                    &ctx,
                    &cfg,
                )
                .expect("comparison")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
