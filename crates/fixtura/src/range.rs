//! Uniform integer draws over closed ranges, plus the domain-narrowing
//! guards shared by every terminal operation.

use fixtura_core::{GenerationError, Result};
use rand::Rng;

/// Uniform draw from the inclusive range `[min, max]`.
///
/// Equal bounds short-circuit without touching the RNG, so degenerate ranges
/// are fully deterministic. The underlying uniform sampler widens internally
/// and rejects biased tails, so spans wider than `i64` (including the full
/// domain) are drawn without overflow or modulo bias.
pub fn i64_between<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> Result<i64> {
    if min > max {
        return Err(GenerationError::OutOfDomain(format!(
            "min {min} must be <= max {max}"
        )));
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.random_range(min..=max))
}

/// Batch form of [`i64_between`]: `n` independent draws.
pub fn i64_many<R: Rng + ?Sized>(min: i64, max: i64, n: usize, rng: &mut R) -> Result<Vec<i64>> {
    (0..n).map(|_| i64_between(min, max, rng)).collect()
}

/// Guard for terminal operations that narrow to `i32`.
///
/// The check is against the requested output type, independent of the 64-bit
/// arithmetic used to draw the value: a boundary that only fits `i64` fails
/// here instead of wrapping later.
pub fn check_i32_bounds(min: i64, max: i64) -> Result<()> {
    if min < i64::from(i32::MIN) || max > i64::from(i32::MAX) {
        return Err(GenerationError::OutOfDomain(format!(
            "bounds [{min}, {max}] exceed the i32 domain"
        )));
    }
    Ok(())
}

/// Resolves a string length from an `i64` range. Negative bounds are a
/// domain error, not a clamp.
pub fn length_between<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> Result<usize> {
    if min < 0 {
        return Err(GenerationError::OutOfDomain(format!(
            "length bounds must be >= 0, got min {min}"
        )));
    }
    let len = i64_between(min, max, rng)?;
    usize::try_from(len).map_err(|_| {
        GenerationError::OutOfDomain(format!("length {len} does not fit the platform usize"))
    })
}
