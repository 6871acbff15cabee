//! Uniform sampling from finite populations.

use std::collections::HashSet;
use std::hash::Hash;

use fixtura_core::{GenerationError, Result};
use rand::Rng;
use rand::seq::index;

use crate::range;

/// One uniform pick from a non-empty population.
pub fn one<'a, T, R: Rng + ?Sized>(population: &'a [T], rng: &mut R) -> Result<&'a T> {
    if population.is_empty() {
        return Err(GenerationError::OutOfDomain(
            "cannot sample from an empty population".to_string(),
        ));
    }
    let index = range::i64_between(0, population.len() as i64 - 1, rng)? as usize;
    Ok(&population[index])
}

/// One uniform pick over the union of `population` and `extras`, without
/// materializing a combined collection: the draw indexes across both slices.
pub fn one_with<'a, T, R: Rng + ?Sized>(
    population: &'a [T],
    extras: &'a [T],
    rng: &mut R,
) -> Result<&'a T> {
    let total = population.len() + extras.len();
    if total == 0 {
        return Err(GenerationError::OutOfDomain(
            "cannot sample from an empty population".to_string(),
        ));
    }
    let index = range::i64_between(0, total as i64 - 1, rng)? as usize;
    Ok(if index < population.len() {
        &population[index]
    } else {
        &extras[index - population.len()]
    })
}

/// `n` elements drawn without replacement: a permutation of a uniformly
/// chosen `n`-subset. `n` greater than the population size is a domain
/// error; `n == 0` returns an empty vector.
pub fn many<T: Clone, R: Rng + ?Sized>(
    population: &[T],
    n: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if n > population.len() {
        return Err(GenerationError::OutOfDomain(format!(
            "cannot sample {n} distinct elements from a population of {}",
            population.len()
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    let picked = index::sample(rng, population.len(), n);
    Ok(picked.iter().map(|index| population[index].clone()).collect())
}

/// Batch form without an explicit count: `n` is drawn uniformly from
/// `[0, population.len()]`, both ends inclusive.
pub fn many_implicit<T: Clone, R: Rng + ?Sized>(population: &[T], rng: &mut R) -> Result<Vec<T>> {
    let n = range::i64_between(0, population.len() as i64, rng)? as usize;
    many(population, n, rng)
}

/// Without-replacement sampling from a set-typed population. Duplicates have
/// already collapsed under set equality, so the effective population is the
/// set's distinct elements.
pub fn many_from_set<T, R>(population: &HashSet<T>, n: usize, rng: &mut R) -> Result<HashSet<T>>
where
    T: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let snapshot: Vec<&T> = population.iter().collect();
    let picked = many(&snapshot, n, rng)?;
    Ok(picked.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn singleton_population_always_returns_its_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..16 {
            assert_eq!(one(&["only"], &mut rng).unwrap(), &"only");
        }
    }

    #[test]
    fn empty_population_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let empty: &[u8] = &[];
        assert!(matches!(
            one(empty, &mut rng),
            Err(GenerationError::OutOfDomain(_))
        ));
    }

    #[test]
    fn union_sampling_reaches_the_extras() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let population = ["a", "b"];
        let extras = ["x"];
        let mut seen_extra = false;
        for _ in 0..256 {
            let picked = one_with(&population, &extras, &mut rng).unwrap();
            if *picked == "x" {
                seen_extra = true;
            }
        }
        assert!(seen_extra, "extras never sampled across 256 draws");
    }

    #[test]
    fn many_returns_distinct_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let population: Vec<u32> = (0..10).collect();
        let picked = many(&population, 6, &mut rng).unwrap();
        assert_eq!(picked.len(), 6);
        let distinct: HashSet<u32> = picked.iter().copied().collect();
        assert_eq!(distinct.len(), 6, "sampled with a repeat: {picked:?}");
        assert!(picked.iter().all(|value| population.contains(value)));
    }

    #[test]
    fn many_rejects_counts_beyond_the_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = many(&["a", "b", "c"], 5, &mut rng);
        assert!(matches!(result, Err(GenerationError::OutOfDomain(_))));
    }

    #[test]
    fn many_with_zero_count_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert!(many(&[1, 2, 3], 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn implicit_count_stays_within_population_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let population: Vec<u32> = (0..5).collect();
        for _ in 0..64 {
            let picked = many_implicit(&population, &mut rng).unwrap();
            assert!(picked.len() <= population.len());
        }
    }

    #[test]
    fn set_sampling_respects_the_distinct_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let population: HashSet<&str> = ["a", "b", "c"].into_iter().collect();
        let picked = many_from_set(&population, 2, &mut rng).unwrap();
        assert_eq!(picked.len(), 2);
        assert!(many_from_set(&population, 4, &mut rng).is_err());
    }
}
