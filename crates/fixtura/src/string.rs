//! String generation over a character set.
//!
//! Length is counted in `char`s (Unicode scalar values), so a
//! supplementary-plane character occupies exactly one position. The modifier
//! pipeline uses the same unit when computing replacement offsets.

use fixtura_core::{CharSet, GenerationError, Result};
use rand::Rng;
use tracing::trace;

/// Implicit batch sizes are drawn uniformly from this inclusive range when a
/// caller asks for "many" strings without an explicit count.
pub const IMPLICIT_BATCH_MIN: usize = 1;
pub const IMPLICIT_BATCH_MAX: usize = 100;

/// Generates a string of exactly `len` characters, each drawn independently
/// and uniformly from `charset`.
///
/// A zero length returns the empty string without consulting the RNG.
pub fn generate<R: Rng + ?Sized>(len: usize, charset: &CharSet, rng: &mut R) -> Result<String> {
    if len == 0 {
        return Ok(String::new());
    }
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(pick(charset, rng)?);
    }
    Ok(out)
}

/// Ranged form: resolves an exact length from `[min_len, max_len]` first,
/// then generates that many characters.
pub fn generate_ranged<R: Rng + ?Sized>(
    min_len: i64,
    max_len: i64,
    charset: &CharSet,
    rng: &mut R,
) -> Result<String> {
    let len = crate::range::length_between(min_len, max_len, rng)?;
    generate(len, charset, rng)
}

/// `n` independently generated strings of exactly `len` characters.
pub fn generate_many<R: Rng + ?Sized>(
    len: usize,
    charset: &CharSet,
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..n).map(|_| generate(len, charset, rng)).collect()
}

/// Batch form without an explicit count: the count itself is drawn uniformly
/// from `[IMPLICIT_BATCH_MIN, IMPLICIT_BATCH_MAX]`.
pub fn generate_many_implicit<R: Rng + ?Sized>(
    len: usize,
    charset: &CharSet,
    rng: &mut R,
) -> Result<Vec<String>> {
    let n = rng.random_range(IMPLICIT_BATCH_MIN..=IMPLICIT_BATCH_MAX);
    trace!(count = n, "drew implicit batch size");
    generate_many(len, charset, n, rng)
}

/// One uniform character from `charset`.
pub(crate) fn pick<R: Rng + ?Sized>(charset: &CharSet, rng: &mut R) -> Result<char> {
    let total = charset.len();
    if total == 0 {
        return Err(GenerationError::OutOfDomain(
            "cannot draw characters from an empty charset".to_string(),
        ));
    }
    let index = if total == 1 {
        0
    } else {
        rng.random_range(0..total)
    };
    charset.char_at(index).ok_or_else(|| {
        GenerationError::OutOfDomain(format!("charset index {index} out of bounds"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_length_returns_empty_string() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let charset = CharSet::range('a', 'z');
        assert_eq!(generate(0, &charset, &mut rng).unwrap(), "");
    }

    #[test]
    fn empty_charset_with_positive_length_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let result = generate(3, &CharSet::default(), &mut rng);
        assert!(matches!(result, Err(GenerationError::OutOfDomain(_))));
    }

    #[test]
    fn length_is_counted_in_chars_for_supplementary_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let charset = CharSet::range('\u{1F600}', '\u{1F64F}');
        let value = generate(12, &charset, &mut rng).unwrap();
        assert_eq!(value.chars().count(), 12);
        assert!(value.len() > 12, "emoji take more than one byte each");
    }

    #[test]
    fn ranged_length_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let charset = CharSet::range('a', 'z');
        for _ in 0..64 {
            let value = generate_ranged(3, 9, &charset, &mut rng).unwrap();
            let len = value.chars().count();
            assert!((3..=9).contains(&len), "length {len} out of [3, 9]");
        }
    }

    #[test]
    fn implicit_batch_count_is_within_the_documented_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let charset = CharSet::range('a', 'z');
        for _ in 0..32 {
            let batch = generate_many_implicit(4, &charset, &mut rng).unwrap();
            assert!((IMPLICIT_BATCH_MIN..=IMPLICIT_BATCH_MAX).contains(&batch.len()));
        }
    }
}
