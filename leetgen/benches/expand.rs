mod common;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use leetgen::{GeneratorConfig, Limit, Order, PassphraseGenerator, SEED_TERMS, expand_all, leetify};

fn bench_leetify(c: &mut Criterion) {
    c.bench_function("leetify_seed_terms", |b| {
        b.iter(|| {
            for term in SEED_TERMS {
                black_box(leetify(black_box(term)));
            }
        })
    });
}

fn bench_expand_seed(c: &mut Criterion) {
    c.bench_function("expand_all_seed_terms", |b| {
        b.iter(|| black_box(expand_all(black_box(SEED_TERMS))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let generator = PassphraseGenerator::new(GeneratorConfig::default());
    group.bench_function("generation_order", |b| b.iter(|| black_box(generator.generate())));

    let sorted = PassphraseGenerator::new(
        GeneratorConfig::default().with_order(Order::Lexicographic),
    );
    group.bench_function("lexicographic_order", |b| b.iter(|| black_box(sorted.generate())));

    group.finish();
}

/// Large random seed list, well past the default limit.
fn bench_expand_random(c: &mut Criterion) {
    let terms = common::generate_random_terms(10_000);
    let config = GeneratorConfig::default().with_limit(Limit::from(10_000));

    c.bench_function("generate_random_10k_terms", |b| {
        b.iter_batched(
            || terms.clone(),
            |terms| black_box(leetgen::generate(terms, &config)),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_leetify,
    bench_expand_seed,
    bench_generate,
    bench_expand_random,
);
criterion_main!(benches);
