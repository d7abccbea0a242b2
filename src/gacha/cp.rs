//! Combat power generation.

use rand::Rng;

/// Applies a variance factor to a base CP, rounding and flooring at 1.
pub fn scale(base_cp: i64, factor: f64) -> i64 {
    let scaled = (base_cp as f64 * (1.0 + factor)).round() as i64;
    scaled.max(1)
}

/// Generates a randomized CP from a base value using the supplied RNG.
///
/// The result is `round(base_cp * (1 + U))` with `U` uniform over
/// `[-variance, +variance]`, floored at 1. Total: never fails. Callers should
/// re-resolve the rank from the generated CP for display rather than assuming
/// the originating rank.
///
/// # Arguments
/// - `rng` - Random number generator
/// - `base_cp` - The power definition's base combat power
/// - `variance` - Spread as a fraction (e.g. 0.10 for ±10%); non-positive
///   values produce exactly `base_cp`
pub fn generate_cp_with<R: Rng + ?Sized>(rng: &mut R, base_cp: i64, variance: f64) -> i64 {
    let factor = if variance <= 0.0 {
        0.0
    } else {
        rng.random_range(-variance..=variance)
    };
    scale(base_cp, factor)
}

/// Generates a randomized CP from a base value using the thread-local RNG.
///
/// Convenience wrapper over `generate_cp_with` for callers outside the draw
/// engine (store pricing, merge previews, inventory display).
pub fn generate_cp(base_cp: i64, variance: f64) -> i64 {
    generate_cp_with(&mut rand::rng(), base_cp, variance)
}
