//! One-line convenience wrappers over the request builder, the temporal
//! generator, and the sampler.
//!
//! Wrappers whose preconditions are fixed constants cannot fail and return
//! plain values; everything that takes caller-supplied bounds reports the
//! usual typed errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use fixtura_core::{GenerationError, Result};
use rand::Rng;

use crate::{request, sample, temporal};

/// A uniform `i32` over the whole `i32` domain.
pub fn any_integer() -> i32 {
    rand::rng().random_range(i32::MIN..=i32::MAX)
}

/// A uniform `i32` in `[0, max]`.
pub fn integer(max: i32) -> Result<i32> {
    request::up_to(i64::from(max)).integer()
}

/// A uniform `i32` in `[min, max]`.
pub fn integer_between(min: i32, max: i32) -> Result<i32> {
    request::between(i64::from(min), i64::from(max)).integer()
}

/// A uniform `i32` in `[1, i32::MAX]`.
pub fn positive_integer() -> i32 {
    rand::rng().random_range(1..=i32::MAX)
}

/// A uniform `i64` in `[min, max]`.
pub fn long_between(min: i64, max: i64) -> Result<i64> {
    request::between(min, max).long()
}

pub fn alphanumeric(len: usize) -> Result<String> {
    request::length(len as i64).alphanumeric()
}

pub fn alphanumeric_between(min: usize, max: usize) -> Result<String> {
    request::between(min as i64, max as i64).alphanumeric()
}

pub fn numeric(len: usize) -> Result<String> {
    request::length(len as i64).numeric()
}

pub fn numeric_between(min: usize, max: usize) -> Result<String> {
    request::between(min as i64, max as i64).numeric()
}

pub fn english(len: usize) -> Result<String> {
    request::length(len as i64).english()
}

pub fn english_between(min: usize, max: usize) -> Result<String> {
    request::between(min as i64, max as i64).english()
}

/// Unicode string mixing several scripts, symbols, and supplementary-plane
/// characters; `len` is counted in chars.
pub fn unicode(len: usize) -> Result<String> {
    request::length(len as i64).unicode()
}

pub fn unicode_between(min: usize, max: usize) -> Result<String> {
    request::between(min as i64, max as i64).unicode()
}

pub fn special_symbols(len: usize) -> Result<String> {
    request::length(len as i64).special_symbols()
}

pub fn special_symbols_between(min: usize, max: usize) -> Result<String> {
    request::between(min as i64, max as i64).special_symbols()
}

/// A fair coin flip.
pub fn bool_() -> bool {
    rand::rng().random_bool(0.5)
}

/// `n` independent fair coin flips.
pub fn bools(n: usize) -> Vec<bool> {
    (0..n).map(|_| bool_()).collect()
}

/// `true` with the given probability. The exact endpoints 0 and 1 return
/// without consulting the RNG.
pub fn weighed_true(probability: f64) -> Result<bool> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GenerationError::OutOfDomain(format!(
            "probability {probability} must be within [0, 1]"
        )));
    }
    if probability == 0.0 {
        return Ok(false);
    }
    if probability == 1.0 {
        return Ok(true);
    }
    Ok(rand::rng().random_bool(probability))
}

/// `Some(true)`, `Some(false)`, or `None`, equiprobably.
pub fn nullable_bool() -> Option<bool> {
    match rand::rng().random_range(0..3) {
        0 => Some(true),
        1 => Some(false),
        _ => None,
    }
}

/// One uniform element from the population.
pub fn sample<'a, T>(population: &'a [T]) -> Result<&'a T> {
    sample::one(population, &mut rand::rng())
}

/// One uniform element from the union of the population and the extras.
pub fn sample_with<'a, T>(population: &'a [T], extras: &'a [T]) -> Result<&'a T> {
    sample::one_with(population, extras, &mut rand::rng())
}

/// `n` elements without replacement.
pub fn sample_multiple<T: Clone>(population: &[T], n: usize) -> Result<Vec<T>> {
    sample::many(population, n, &mut rand::rng())
}

/// A uniformly sized subset of the population (count drawn from
/// `[0, len]`), without replacement.
pub fn sample_some<T: Clone>(population: &[T]) -> Result<Vec<T>> {
    sample::many_implicit(population, &mut rand::rng())
}

/// A uniform instant over the whole representable window.
pub fn instant() -> Result<DateTime<Utc>> {
    temporal::between(temporal::linear_min(), temporal::linear_max()).instant()
}

pub fn instants(n: usize) -> Result<Vec<DateTime<Utc>>> {
    temporal::between(temporal::linear_min(), temporal::linear_max()).instants(n)
}

pub fn local_dates(n: usize) -> Result<Vec<NaiveDate>> {
    temporal::between(temporal::linear_min(), temporal::linear_max()).local_dates(n)
}

pub fn local_date_times(n: usize) -> Result<Vec<NaiveDateTime>> {
    temporal::between(temporal::linear_min(), temporal::linear_max()).local_date_times(n)
}
