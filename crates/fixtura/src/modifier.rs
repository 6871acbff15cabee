//! Length-preserving string mutations applied after generation.
//!
//! Modifiers replace characters in place: inserting a symbol at a random
//! position, or overwriting a fixed prefix/suffix. Positions are char
//! indices, the same unit the string generator counts length in, so
//! supplementary characters are never split. Every modifier is stateless and
//! safe to reuse across any number of generation calls.

use std::sync::Arc;

use fixtura_core::{CharClass, CharSet, GenerationError, Result, vocabulary};
use rand::{Rng, RngCore};

use crate::string;

/// Capability to transform a string into a same-length string.
pub trait StringModifier: Send + Sync {
    fn apply(&self, original: String, rng: &mut dyn RngCore) -> Result<String>;
}

/// Replaces one randomly chosen position with a random character from `chars`.
pub fn one_of(chars: &str) -> Arc<dyn StringModifier> {
    one_of_set(CharSet::from_chars(chars))
}

pub fn one_of_set(charset: CharSet) -> Arc<dyn StringModifier> {
    Arc::new(OneOf { charset })
}

/// Replaces a random count (1..=len) of randomly chosen positions, with
/// replacement, each by a random character from `chars`.
pub fn multiple_of(chars: &str) -> Arc<dyn StringModifier> {
    multiple_of_set(CharSet::from_chars(chars))
}

pub fn multiple_of_set(charset: CharSet) -> Arc<dyn StringModifier> {
    Arc::new(MultipleOf { charset })
}

/// Overwrites the leading `text.chars().count()` positions with `text`.
pub fn prefix(text: &str) -> Arc<dyn StringModifier> {
    Arc::new(Prefix {
        text: text.chars().collect(),
    })
}

/// Overwrites the trailing `text.chars().count()` positions with `text`.
pub fn suffix(text: &str) -> Arc<dyn StringModifier> {
    Arc::new(Suffix {
        text: text.chars().collect(),
    })
}

/// Scatters spaces over the string.
pub fn spaces() -> Arc<dyn StringModifier> {
    multiple_of(" ")
}

pub fn space_left() -> Arc<dyn StringModifier> {
    prefix(" ")
}

pub fn spaces_left(n: usize) -> Arc<dyn StringModifier> {
    prefix(&" ".repeat(n))
}

pub fn space_right() -> Arc<dyn StringModifier> {
    suffix(" ")
}

pub fn spaces_right(n: usize) -> Arc<dyn StringModifier> {
    suffix(&" ".repeat(n))
}

/// Replaces one position with a character from the process-wide special
/// symbols table, as configured at the moment this modifier is built.
pub fn special_symbol() -> Arc<dyn StringModifier> {
    one_of_set(vocabulary::snapshot().charset(CharClass::SpecialSymbols))
}

struct OneOf {
    charset: CharSet,
}

impl StringModifier for OneOf {
    fn apply(&self, original: String, rng: &mut dyn RngCore) -> Result<String> {
        let mut chars: Vec<char> = original.chars().collect();
        if chars.is_empty() {
            return Ok(original);
        }
        let index = rng.random_range(0..chars.len());
        chars[index] = string::pick(&self.charset, rng)?;
        Ok(chars.into_iter().collect())
    }
}

struct MultipleOf {
    charset: CharSet,
}

impl StringModifier for MultipleOf {
    fn apply(&self, original: String, rng: &mut dyn RngCore) -> Result<String> {
        let mut chars: Vec<char> = original.chars().collect();
        if chars.is_empty() {
            return Ok(original);
        }
        let count = rng.random_range(1..=chars.len());
        for _ in 0..count {
            let index = rng.random_range(0..chars.len());
            chars[index] = string::pick(&self.charset, rng)?;
        }
        Ok(chars.into_iter().collect())
    }
}

struct Prefix {
    text: Vec<char>,
}

impl StringModifier for Prefix {
    fn apply(&self, original: String, _rng: &mut dyn RngCore) -> Result<String> {
        let mut chars: Vec<char> = original.chars().collect();
        if self.text.len() > chars.len() {
            return Err(GenerationError::ModifierLength(format!(
                "prefix of {} chars cannot be applied to a {}-char string",
                self.text.len(),
                chars.len()
            )));
        }
        chars[..self.text.len()].copy_from_slice(&self.text);
        Ok(chars.into_iter().collect())
    }
}

struct Suffix {
    text: Vec<char>,
}

impl StringModifier for Suffix {
    fn apply(&self, original: String, _rng: &mut dyn RngCore) -> Result<String> {
        let mut chars: Vec<char> = original.chars().collect();
        if self.text.len() > chars.len() {
            return Err(GenerationError::ModifierLength(format!(
                "suffix of {} chars cannot be applied to a {}-char string",
                self.text.len(),
                chars.len()
            )));
        }
        let start = chars.len() - self.text.len();
        chars[start..].copy_from_slice(&self.text);
        Ok(chars.into_iter().collect())
    }
}
