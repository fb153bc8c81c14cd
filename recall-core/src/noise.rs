//! Gaussian activation noise.
//!
//! Each memory item draws its noise term once, at construction, from
//! `N(0, σ)`. The sample is fixed for the item's lifetime so repeated queries
//! in one session stay comparable.
//!
//! Sampling uses the Box–Muller transform over two uniforms from the caller's
//! RNG. Passing a seeded RNG (e.g. `StdRng::seed_from_u64`) makes a whole
//! simulation reproducible.

use std::f64::consts::TAU;

use rand::Rng;

/// Draw one sample from `N(0, std_dev)`.
///
/// A zero (or negative) standard deviation yields exactly `0.0` without
/// consuming randomness.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    // u1 must be strictly positive for the logarithm.
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    z * std_dev
}
