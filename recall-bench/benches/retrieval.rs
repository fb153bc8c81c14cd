//! Recall Benchmark Suite
//!
//! Targets:
//!   activation_single_item ............ < 1μs
//!   retrieval_substring_from_200 ...... < 50μs
//!   retrieval_all_candidates_200 ...... < 100μs
//!   iso9001_session_10_trials ......... < 50μs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use recall_bench::{CUES, synthetic_store};
use recall_core::MemoryItem;
use recall_core::config::RecallConfig;
use recall_sim::{Catalog, KeywordContext};

/// Benchmark: one activation computation with two weighted cues.
fn bench_activation(c: &mut Criterion) {
    let mut item = MemoryItem::new("Mejora continua", "", 0.5, 0.0)
        .with_associations([("montaña", 0.9), ("escalada", 0.6)]);
    let cues = ["montaña", "escalada"];
    let weights = [0.5, 0.5];

    c.bench_function("activation_single_item", |b| {
        b.iter(|| {
            let a = item
                .calculate_activation(black_box(&cues), black_box(&weights))
                .unwrap();
            black_box(a);
        });
    });
}

/// Benchmark: a query that matches a handful of 200 items.
fn bench_retrieval_narrow(c: &mut Criterion) {
    let mut store = synthetic_store(200);
    let weights = [0.25; 4];

    c.bench_function("retrieval_substring_from_200", |b| {
        b.iter(|| {
            let hit = store
                .retrieve(black_box("concepto 19"), &CUES, &weights, true)
                .unwrap()
                .is_some();
            black_box(hit);
        });
    });
}

/// Benchmark: a query every item matches, so all 200 are scored.
fn bench_retrieval_broad(c: &mut Criterion) {
    let mut store = synthetic_store(200);
    let weights = [0.25; 4];

    c.bench_function("retrieval_all_candidates_200", |b| {
        b.iter(|| {
            let hit = store
                .retrieve(black_box("concepto"), &CUES, &weights, false)
                .unwrap()
                .is_some();
            black_box(hit);
        });
    });
}

/// Benchmark: ten study trials against the built-in catalog.
fn bench_iso_session(c: &mut Criterion) {
    let config = RecallConfig::default();
    let catalog = Catalog::iso9001().unwrap();
    let context = KeywordContext::parse("capitán dirección");

    c.bench_function("iso9001_session_10_trials", |b| {
        b.iter(|| {
            let mut store = catalog.build_store(&config, &mut StdRng::seed_from_u64(1));
            for _ in 0..10 {
                let hit = store
                    .retrieve("liderazgo", context.cues(), context.weights(), true)
                    .unwrap()
                    .is_some();
                black_box(hit);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_activation,
    bench_retrieval_narrow,
    bench_retrieval_broad,
    bench_iso_session,
);
criterion_main!(benches);
