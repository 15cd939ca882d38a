//! Criterion benchmarks for the sampling hot paths.
//!
//! Benchmarks:
//! 1. Stable sampler batch fill
//! 2. Positive-tail unit average
//! 3. One-touch simulation, serial vs parallel chunks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use elc_core::{PathSimulator, PercentileBracket, RngHierarchy, StableSampler, UnitAverageEstimator};

// ── 1. Sampler ───────────────────────────────────────────────────────

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("stable_sampler");

    for &alpha in &[1.0, 1.5, 1.6] {
        let sampler = StableSampler::standard(alpha).unwrap();
        let mut buf = vec![0.0; 100_000];
        group.bench_with_input(BenchmarkId::new("fill_100k", alpha), &alpha, |b, _| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| sampler.fill(&mut rng, black_box(&mut buf)));
        });
    }

    group.finish();
}

// ── 2. Unit average ──────────────────────────────────────────────────

fn bench_unit_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_average");
    let bracket = PercentileBracket::new(90.0, 100.0).unwrap();

    for &pool in &[10_000usize, 100_000] {
        let est = UnitAverageEstimator::new(pool);
        group.bench_with_input(BenchmarkId::new("pool", pool), &pool, |b, _| {
            let mut rng = StdRng::seed_from_u64(2);
            b.iter(|| est.estimate(black_box(bracket), 1.6, &mut rng).unwrap());
        });
    }

    group.finish();
}

// ── 3. One-touch ─────────────────────────────────────────────────────

fn bench_one_touch(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_touch");
    group.sample_size(10);
    let seeds = RngHierarchy::new(3);

    for &parallel in &[false, true] {
        let sim = PathSimulator::new(2_000, 0.01).with_parallelism(parallel);
        let label = if parallel { "parallel" } else { "serial" };
        group.bench_function(BenchmarkId::new(label, "2k_paths_h1"), |b| {
            b.iter(|| {
                sim.one_touch_probability(black_box(-2.0), 1.0, 1.6, &seeds)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampler, bench_unit_average, bench_one_touch);
criterion_main!(benches);
