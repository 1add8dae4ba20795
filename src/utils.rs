//! Utility functions for the gridnav crate

use rand::{SeedableRng, rngs::StdRng};

/// Build the crate's default random source.
///
/// Seeded generators are reproducible; unseeded ones draw their seed from
/// the thread-local generator.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Index of the first maximum in `values`.
///
/// Ties resolve to the lowest index. Returns 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use gridnav::utils::argmax_first;
///
/// assert_eq!(argmax_first(&[0.0, 2.0, 2.0, 1.0]), 1);
/// assert_eq!(argmax_first(&[0.0, 0.0, 0.0, 0.0]), 0);
/// ```
pub fn argmax_first(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

/// Largest value in `values`, or negative infinity for an empty slice.
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
