//! Per-tier predicate benchmarks.
//!
//! Each predicate is exercised at the three escalation depths separately:
//! well-separated input settled by the static / A-tier filters, near-
//! degenerate input that runs the adaptive expansion stages, and exactly
//! degenerate input that falls through to the fully exact tier. The two
//! standalone incircle formulations are measured alongside as the cost
//! ceiling the adaptive path is avoiding.

use criterion::{criterion_group, criterion_main, Criterion};
use exactpred::{incircle_exact, incircle_slow, PredicateContext};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_points3(rng: &mut StdRng, n: usize, scale: f64) -> Vec<[f64; 3]> {
    (0..n)
        .map(|_| [0.0; 3].map(|_| (rng.gen::<f64>() - 0.5) * scale))
        .collect()
}

fn random_points2(rng: &mut StdRng, n: usize, scale: f64) -> Vec<[f64; 2]> {
    (0..n)
        .map(|_| [0.0; 2].map(|_| (rng.gen::<f64>() - 0.5) * scale))
        .collect()
}

/// Points on the plane z = x + y with dyadic coordinates; the sums are
/// exact, so the configuration is exactly coplanar.
fn coplanar_point(rng: &mut StdRng) -> [f64; 3] {
    let x = rng.gen_range(-(1i64 << 26)..(1i64 << 26)) as f64 / (1u64 << 13) as f64;
    let y = rng.gen_range(-(1i64 << 26)..(1i64 << 26)) as f64 / (1u64 << 13) as f64;
    [x, y, x + y]
}

fn bench_orient3d(c: &mut Criterion) {
    let ctx = PredicateContext::new(8192.0, 8192.0, 16384.0);
    let mut rng = StdRng::seed_from_u64(42);

    let separated = random_points3(&mut rng, 4 * 1000, 1000.0);
    c.bench_function("orient3d/static_filter", |b| {
        b.iter(|| {
            for q in separated.chunks_exact(4) {
                black_box(ctx.orient3d(
                    black_box(q[0]),
                    black_box(q[1]),
                    black_box(q[2]),
                    black_box(q[3]),
                ));
            }
        })
    });

    let near: Vec<[f64; 3]> = (0..4 * 1000)
        .map(|i| {
            let mut p = coplanar_point(&mut rng);
            if i % 4 == 3 {
                p[2] += 2f64.powi(-40);
            }
            p
        })
        .collect();
    c.bench_function("orient3d/adaptive", |b| {
        b.iter(|| {
            for q in near.chunks_exact(4) {
                black_box(ctx.orient3d(
                    black_box(q[0]),
                    black_box(q[1]),
                    black_box(q[2]),
                    black_box(q[3]),
                ));
            }
        })
    });

    let coplanar: Vec<[f64; 3]> = (0..4 * 1000).map(|_| coplanar_point(&mut rng)).collect();
    c.bench_function("orient3d/exact_tier", |b| {
        b.iter(|| {
            for q in coplanar.chunks_exact(4) {
                black_box(ctx.orient3d(
                    black_box(q[0]),
                    black_box(q[1]),
                    black_box(q[2]),
                    black_box(q[3]),
                ));
            }
        })
    });
}

fn bench_incircle(c: &mut Criterion) {
    let ctx = PredicateContext::new(1000.0, 1000.0, 1000.0);
    let mut rng = StdRng::seed_from_u64(4242);

    let separated = random_points2(&mut rng, 4 * 1000, 1000.0);
    c.bench_function("incircle/filter", |b| {
        b.iter(|| {
            for q in separated.chunks_exact(4) {
                black_box(ctx.incircle(
                    black_box(q[0]),
                    black_box(q[1]),
                    black_box(q[2]),
                    black_box(q[3]),
                ));
            }
        })
    });

    // integer points on the circle x^2 + y^2 = 25: exactly cocircular
    let cocircular: [[f64; 2]; 4] = [[3.0, 4.0], [5.0, 0.0], [-4.0, 3.0], [0.0, -5.0]];
    c.bench_function("incircle/exact_tier", |b| {
        b.iter(|| {
            black_box(ctx.incircle(
                black_box(cocircular[0]),
                black_box(cocircular[1]),
                black_box(cocircular[2]),
                black_box(cocircular[3]),
            ))
        })
    });
    c.bench_function("incircle/incircle_exact", |b| {
        b.iter(|| {
            black_box(incircle_exact(
                black_box(cocircular[0]),
                black_box(cocircular[1]),
                black_box(cocircular[2]),
                black_box(cocircular[3]),
            ))
        })
    });
    c.bench_function("incircle/incircle_slow", |b| {
        b.iter(|| {
            black_box(incircle_slow(
                black_box(cocircular[0]),
                black_box(cocircular[1]),
                black_box(cocircular[2]),
                black_box(cocircular[3]),
            ))
        })
    });
}

fn bench_insphere(c: &mut Criterion) {
    let ctx = PredicateContext::new(1000.0, 1000.0, 1000.0);
    let mut rng = StdRng::seed_from_u64(424242);

    let separated = random_points3(&mut rng, 5 * 1000, 1000.0);
    c.bench_function("insphere/static_filter", |b| {
        b.iter(|| {
            for q in separated.chunks_exact(5) {
                black_box(ctx.insphere(
                    black_box(q[0]),
                    black_box(q[1]),
                    black_box(q[2]),
                    black_box(q[3]),
                    black_box(q[4]),
                ));
            }
        })
    });

    // integer points on the sphere x^2 + y^2 + z^2 = 81: exactly cospherical
    let cospherical: [[f64; 3]; 5] = [
        [9.0, 0.0, 0.0],
        [0.0, 9.0, 0.0],
        [0.0, 0.0, 9.0],
        [1.0, 4.0, -8.0],
        [-4.0, -4.0, -7.0],
    ];
    c.bench_function("insphere/exact_tier", |b| {
        b.iter(|| {
            black_box(ctx.insphere(
                black_box(cospherical[0]),
                black_box(cospherical[1]),
                black_box(cospherical[2]),
                black_box(cospherical[3]),
                black_box(cospherical[4]),
            ))
        })
    });
}

criterion_group!(benches, bench_orient3d, bench_incircle, bench_insphere);
criterion_main!(benches);
