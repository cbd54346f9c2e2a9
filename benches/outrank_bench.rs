//! Criterion benchmarks for splice reordering and greedy matching.
//!
//! Uses synthetic sponsor/shareholder groups with random share counts,
//! generated from a fixed seed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_outrank::entity::Entity;
use u_outrank::matching::OutrankMatcher;
use u_outrank::pipeline::{RankConfig, RankInput, RankPipeline};
use u_outrank::splice::{SpliceConfig, SpliceEngine};

// ===========================================================================
// Synthetic groups
// ===========================================================================

fn sponsors<R: Rng>(n: usize, rng: &mut R) -> Vec<Entity> {
    (0..n)
        .map(|i| Entity::primary(format!("p{i}"), rng.random_range(300..1000)))
        .collect()
}

fn shareholders<R: Rng>(n: usize, rng: &mut R) -> Vec<Entity> {
    (0..n)
        .map(|i| Entity::secondary(format!("s{i}"), rng.random_range(50..1000)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice");
    let mut rng = StdRng::seed_from_u64(42);

    for &(low, high) in &[(16usize, 64usize), (256, 1024), (4096, 16384)] {
        let l = sponsors(low, &mut rng);
        let h = shareholders(high, &mut rng);
        let config = SpliceConfig::new(low / 2);
        group.bench_with_input(
            BenchmarkId::new(format!("l{}_h{}", low, high), high),
            &(l, h, config),
            |b, (l, h, c)| {
                b.iter(|| {
                    let result = SpliceEngine::run(black_box(l), black_box(h), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let mut rng = StdRng::seed_from_u64(42);

    for &(low, high) in &[(16usize, 64usize), (256, 1024), (4096, 16384)] {
        let l = sponsors(low, &mut rng);
        let h = shareholders(high, &mut rng);
        group.bench_with_input(
            BenchmarkId::new(format!("l{}_h{}", low, high), high),
            &(l, h),
            |b, (l, h)| {
                b.iter(|| {
                    let report = OutrankMatcher::run(black_box(l), black_box(h));
                    black_box(report)
                })
            },
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    let mut rng = StdRng::seed_from_u64(42);

    let inputs: Vec<RankInput> = (0..64)
        .map(|i| {
            RankInput::new(
                format!("building{i}"),
                sponsors(16, &mut rng),
                shareholders(64, &mut rng),
            )
        })
        .collect();

    for parallel in [false, true] {
        let config = RankConfig::promote(8).with_parallel(parallel);
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &config,
            |b, c| b.iter(|| black_box(RankPipeline::run_batch(black_box(&inputs), c))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_splice, bench_match, bench_batch);
criterion_main!(benches);
