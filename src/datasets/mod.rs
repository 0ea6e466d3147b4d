//! Toy datasets for building intuition about model fitting.
//!
//! # Purpose
//!
//! This module supplies small fixed and synthetic sample tables. The fixed
//! tables make hand-checkable fixtures; the synthetic ones draw reproducible
//! Gaussian noise from a seeded generator, so equal seeds yield equal
//! tables.
//!
//! # Design notes
//!
//! * **Seeded**: Every synthetic generator takes a `seed`; there is no
//!   hidden global randomness.
//! * **Small**: Tables are a few dozen rows, sized for exercises, not for
//!   throughput.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::primitives::table::SampleTable;

/// A three-row table lying exactly on the line `y = 2x`.
///
/// Minimizing either loss for `p0 + p1*x` over this table yields
/// `p ≈ (0, 2)` with loss ≈ 0.
pub fn perfect_line() -> SampleTable<f64> {
    // Shape is static; build cannot fail.
    SampleTable::builder()
        .continuous("x", vec![1.0, 2.0, 3.0])
        .response(vec![2.0, 4.0, 6.0])
        .build()
        .unwrap()
}

/// A noisy linear trend: x on a 1..=10 grid with three replicates per
/// point, response `4 + 2.1*x` plus Gaussian noise (sd 1.5).
pub fn linear_trend(seed: u64) -> SampleTable<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.5).unwrap();

    let mut x = Vec::with_capacity(30);
    let mut y = Vec::with_capacity(30);
    for i in 1..=10 {
        for _ in 0..3 {
            let xi = i as f64;
            x.push(xi);
            y.push(4.0 + 2.1 * xi + noise.sample(&mut rng));
        }
    }

    SampleTable::builder()
        .continuous("x", x)
        .response(y)
        .build()
        .unwrap()
}

/// Two continuous predictors on a 6×6 grid, response
/// `1 + 2*x1 - 3*x2` plus Gaussian noise (sd 0.5).
pub fn two_predictor_plane(seed: u64) -> SampleTable<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.5).unwrap();

    let mut x1 = Vec::with_capacity(36);
    let mut x2 = Vec::with_capacity(36);
    let mut y = Vec::with_capacity(36);
    for i in 0..6 {
        for j in 0..6 {
            let a = i as f64;
            let b = j as f64;
            x1.push(a);
            x2.push(b);
            y.push(1.0 + 2.0 * a - 3.0 * b + noise.sample(&mut rng));
        }
    }

    SampleTable::builder()
        .continuous("x1", x1)
        .continuous("x2", x2)
        .response(y)
        .build()
        .unwrap()
}

/// One continuous predictor plus a four-level categorical group with
/// per-level offsets, response `2 + 1.2*x + offset(group)` plus Gaussian
/// noise (sd 0.8).
///
/// Offsets: `a` = 0 (baseline), `b` = 3, `c` = -2, `d` = 5.
pub fn grouped_offsets(seed: u64) -> SampleTable<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.8).unwrap();

    let groups = ["a", "b", "c", "d"];
    let offsets = [0.0, 3.0, -2.0, 5.0];

    let mut x = Vec::with_capacity(32);
    let mut labels: Vec<&str> = Vec::with_capacity(32);
    let mut y = Vec::with_capacity(32);
    for (&group, &offset) in groups.iter().zip(offsets.iter()) {
        for i in 1..=8 {
            let xi = i as f64;
            x.push(xi);
            labels.push(group);
            y.push(2.0 + 1.2 * xi + offset + noise.sample(&mut rng));
        }
    }

    SampleTable::builder()
        .continuous("x", x)
        .categorical("group", &labels)
        .response(y)
        .build()
        .unwrap()
}
