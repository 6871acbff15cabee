//! The value-generation front door.
//!
//! A [`RandomValue`] is an immutable request: a numeric range, an optional
//! explicit vocabulary, and an ordered modifier chain. Terminal operations
//! are pure functions of the accumulated request; the same request may be
//! consumed by any number of terminal calls without side effects.

use std::sync::Arc;

use fixtura_core::{CharClass, Result, Vocabulary, vocabulary};
use rand::{Rng, RngCore};
use tracing::trace;

use crate::modifier::StringModifier;
use crate::{range, string};

/// Request over the inclusive range `[min, max]`.
pub fn between(min: i64, max: i64) -> RandomValue {
    RandomValue::between(min, max)
}

/// Request over `[0, max]`.
pub fn up_to(max: i64) -> RandomValue {
    RandomValue::up_to(max)
}

/// Degenerate request pinning the range (and thus string length) to `len`.
pub fn length(len: i64) -> RandomValue {
    RandomValue::length(len)
}

#[derive(Clone)]
pub struct RandomValue {
    min: i64,
    max: i64,
    vocabulary: Option<Vocabulary>,
    modifiers: Vec<Arc<dyn StringModifier>>,
}

impl RandomValue {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            vocabulary: None,
            modifiers: Vec::new(),
        }
    }

    pub fn up_to(max: i64) -> Self {
        Self::between(0, max)
    }

    pub fn length(len: i64) -> Self {
        Self::between(len, len)
    }

    /// Appends a modifier to the chain; order of registration is the order
    /// of application.
    pub fn with(mut self, modifier: Arc<dyn StringModifier>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_all<I>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn StringModifier>>,
    {
        self.modifiers.extend(modifiers);
        self
    }

    /// Threads an explicit vocabulary through this request instead of the
    /// process-wide default.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// A uniform `i32` from the range. Bounds that do not fit the `i32`
    /// domain are rejected before anything is drawn.
    pub fn integer(&self) -> Result<i32> {
        range::check_i32_bounds(self.min, self.max)?;
        let value = range::i64_between(self.min, self.max, &mut rand::rng())?;
        Ok(value as i32)
    }

    /// A uniform `i64` from the range.
    pub fn long(&self) -> Result<i64> {
        range::i64_between(self.min, self.max, &mut rand::rng())
    }

    /// `n` independent `i64` draws from the range.
    pub fn longs(&self, n: usize) -> Result<Vec<i64>> {
        range::i64_many(self.min, self.max, n, &mut rand::rng())
    }

    pub fn alphanumeric(&self) -> Result<String> {
        self.string(CharClass::Alphanumeric)
    }

    pub fn numeric(&self) -> Result<String> {
        self.string(CharClass::Numeric)
    }

    pub fn english(&self) -> Result<String> {
        self.string(CharClass::English)
    }

    pub fn unicode(&self) -> Result<String> {
        self.string(CharClass::Unicode)
    }

    pub fn special_symbols(&self) -> Result<String> {
        self.string(CharClass::SpecialSymbols)
    }

    /// A string whose length is resolved from the range and whose characters
    /// come from the requested class, piped through the modifier chain.
    pub fn string(&self, class: CharClass) -> Result<String> {
        self.draw_string(class, &mut rand::rng())
    }

    /// `n` independently generated strings; each resolves its own length.
    pub fn strings(&self, class: CharClass, n: usize) -> Result<Vec<String>> {
        let mut rng = rand::rng();
        (0..n).map(|_| self.draw_string(class, &mut rng)).collect()
    }

    /// Batch without an explicit count: the count is drawn uniformly from
    /// `[1, 100]`.
    pub fn strings_batch(&self, class: CharClass) -> Result<Vec<String>> {
        let mut rng = rand::rng();
        let n = rng.random_range(string::IMPLICIT_BATCH_MIN..=string::IMPLICIT_BATCH_MAX);
        trace!(count = n, ?class, "drew implicit batch size");
        (0..n).map(|_| self.draw_string(class, &mut rng)).collect()
    }

    pub fn alphanumerics(&self, n: usize) -> Result<Vec<String>> {
        self.strings(CharClass::Alphanumeric, n)
    }

    pub fn alphanumerics_batch(&self) -> Result<Vec<String>> {
        self.strings_batch(CharClass::Alphanumeric)
    }

    pub fn numerics(&self, n: usize) -> Result<Vec<String>> {
        self.strings(CharClass::Numeric, n)
    }

    fn draw_string(&self, class: CharClass, rng: &mut dyn RngCore) -> Result<String> {
        let charset = match &self.vocabulary {
            Some(vocabulary) => vocabulary.charset(class),
            None => vocabulary::snapshot().charset(class),
        };
        let mut value = string::generate_ranged(self.min, self.max, &charset, rng)?;
        for modifier in &self.modifiers {
            value = modifier.apply(value, &mut *rng)?;
        }
        Ok(value)
    }
}

impl std::fmt::Debug for RandomValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomValue")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("explicit_vocabulary", &self.vocabulary.is_some())
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}
