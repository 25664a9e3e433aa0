// Criterion benchmarks for InfluMatch Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use influmatch_algo::core::{tokenize_query, MatchEngine};
use influmatch_algo::services::ProfileStore;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_query", |b| {
        b.iter(|| tokenize_query(black_box("fitness influencers in hyderabad with high engagement")));
    });
}

fn bench_matching(c: &mut Criterion) {
    let engine = MatchEngine::with_default_weights();

    let mut group = c.benchmark_group("matching");

    for roster_size in [10, 50, 100, 500, 1000].iter() {
        let store = ProfileStore::generated(*roster_size, 42);

        group.bench_with_input(
            BenchmarkId::new("find_matches", roster_size),
            roster_size,
            |b, _| {
                b.iter(|| {
                    engine.find_matches(
                        black_box("fitness influencers in hyderabad"),
                        black_box(store.profiles()),
                        black_box(4),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_scoring_pass(c: &mut Criterion) {
    use influmatch_algo::core::{match_percent, raw_score};
    use influmatch_algo::models::ScoringWeights;

    let store = ProfileStore::generated(100, 42);
    let weights = ScoringWeights::default();
    let tokens = tokenize_query("telugu food vlogs for restaurant promotion");

    c.bench_function("scoring_pass_100_profiles", |b| {
        b.iter(|| {
            let scored: Vec<u8> = store
                .profiles()
                .iter()
                .map(|p| match_percent(raw_score(p, &tokens, &weights), tokens.len()))
                .collect();
            black_box(scored)
        });
    });
}

criterion_group!(benches, bench_tokenize, bench_matching, bench_scoring_pass);

criterion_main!(benches);
