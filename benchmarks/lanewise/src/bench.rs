//! lanewise benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Elementwise math: lane-array fallback vs register kernels vs a plain loop
//! - Operator algebra over whole buffers (axpy)
//! - Masked assignment throughput
//!
//! The buffer length defaults to 65536 elements; override it with
//! `LANEWISE_BENCH_SIZE=1000000 cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lanewise::fallback;
use lanewise::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

const DEFAULT_SIZE: usize = 65_536;

fn get_size() -> usize {
    env::var("LANEWISE_BENCH_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_SIZE)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed values in `[lo, hi)`.
fn generate_uniform(size: usize, lo: f32, hi: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(lo, hi).unwrap();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate standard normal values (f64).
fn generate_normal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_exp(c: &mut Criterion) {
    let size = get_size();
    let mut group = c.benchmark_group("exp_f32");
    group.throughput(Throughput::Elements(size as u64));

    let input = generate_uniform(size, -10.0, 10.0, 42);
    let mut output = vec![0.0_f32; size];

    group.bench_function("scalar_loop", |b| {
        b.iter(|| {
            for (out, &x) in output.iter_mut().zip(black_box(&input)) {
                *out = x.exp();
            }
        })
    });

    group.bench_function("fallback_fixed8", |b| {
        b.iter(|| {
            map_slice::<f32, Fixed<8>, _>(black_box(&input), &mut output, fallback::exp).unwrap()
        })
    });

    group.bench_function("specialized_wide256", |b| {
        b.iter(|| map_slice::<f32, Wide256, _>(black_box(&input), &mut output, exp).unwrap())
    });

    group.finish();
}

fn bench_sin_cos(c: &mut Criterion) {
    let size = get_size();
    let mut group = c.benchmark_group("sin_cos_f32");
    group.throughput(Throughput::Elements(size as u64));

    let input = generate_uniform(size, -core::f32::consts::PI, core::f32::consts::PI, 7);
    let mut output = vec![0.0_f32; size];

    group.bench_function("fallback_wide128", |b| {
        b.iter(|| {
            map_slice::<f32, Wide128, _>(black_box(&input), &mut output, |v| {
                fallback::sin(v) + fallback::cos(v)
            })
            .unwrap()
        })
    });

    group.bench_function("specialized_wide128", |b| {
        b.iter(|| {
            map_slice::<f32, Wide128, _>(black_box(&input), &mut output, |v| v.sin() + v.cos())
                .unwrap()
        })
    });

    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let size = get_size();
    let mut group = c.benchmark_group("pow_f64");
    group.throughput(Throughput::Elements(size as u64));

    let base = generate_uniform(size, 0.1, 10.0, 11)
        .into_iter()
        .map(f64::from)
        .collect::<Vec<_>>();
    let exponent = generate_normal(size, 13);
    let mut output = vec![0.0_f64; size];

    for lanes in [2_usize, 4] {
        group.bench_with_input(BenchmarkId::new("fallback", lanes), &lanes, |b, &lanes| {
            b.iter(|| match lanes {
                2 => zip_slice::<f64, Wide128, _>(&base, &exponent, &mut output, pow),
                _ => zip_slice::<f64, Wide256, _>(&base, &exponent, &mut output, pow),
            })
        });
    }

    group.finish();
}

fn bench_axpy(c: &mut Criterion) {
    let size = get_size();
    let mut group = c.benchmark_group("axpy_f32");
    group.throughput(Throughput::Elements(size as u64));

    let x = generate_uniform(size, -1.0, 1.0, 21);
    let y = generate_uniform(size, -1.0, 1.0, 22);
    let mut output = vec![0.0_f32; size];

    group.bench_function("fixed8", |b| {
        b.iter(|| {
            zip_slice::<f32, Fixed<8>, _>(&x, &y, &mut output, |x, y| 2.5_f32 * x + y).unwrap()
        })
    });

    group.bench_function("wide256", |b| {
        b.iter(|| {
            zip_slice::<f32, Wide256, _>(&x, &y, &mut output, |x, y| 2.5_f32 * x + y).unwrap()
        })
    });

    group.finish();
}

fn bench_masked_assign(c: &mut Criterion) {
    let size = get_size();
    let mut group = c.benchmark_group("masked_assign_f32");
    group.throughput(Throughput::Elements(size as u64));

    let input = generate_uniform(size, -1.0, 1.0, 31);
    let mut output = vec![0.0_f32; size];

    group.bench_function("relu_wide256", |b| {
        b.iter(|| {
            map_slice::<f32, Wide256, _>(black_box(&input), &mut output, |mut v| {
                let negative = v.simd_lt(Simd::splat(0.0));
                where_(&negative, &mut v).assign(0.0_f32);
                v
            })
            .unwrap()
        })
    });

    group.bench_function("relu_fixed8", |b| {
        b.iter(|| {
            map_slice::<f32, Fixed<8>, _>(black_box(&input), &mut output, |mut v| {
                let negative = v.simd_lt(Simd::splat(0.0));
                where_(&negative, &mut v).assign(0.0_f32);
                v
            })
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_exp,
    bench_sin_cos,
    bench_pow,
    bench_axpy,
    bench_masked_assign,
);

criterion_main!(benches);
