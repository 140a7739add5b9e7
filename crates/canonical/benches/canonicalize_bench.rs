use canonical::{split_sentences, NormalizationContext, NormalizeConfig, TokenNormalizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_normalize(c: &mut Criterion) {
    let ctx = NormalizationContext::with_defaults(NormalizeConfig::default()).expect("context");
    let mut group = c.benchmark_group("normalize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "Call me Ishmael, some years ago. ".repeat(*size / 33 + 1);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| {
                split_sentences(black_box(&text))
                    .iter()
                    .map(|sentence| ctx.normalize(sentence).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
