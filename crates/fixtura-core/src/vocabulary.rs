//! Named character-set tables used by the string generator.
//!
//! A process-wide default table is available through [`snapshot`] and can be
//! overridden globally by the embedding application. Callers that want to
//! avoid the shared table can build their own [`Vocabulary`] and thread it
//! through a request instead.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charset::CharSet;

/// Default symbol table. Kept close to the punctuation a QA suite throws at
/// input validation; override it per project with [`set`] if needed.
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+{}[]'\"|:?><~`§\\,/;.";

/// Named category of characters a string can be generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Numeric,
    English,
    Alphanumeric,
    SpecialSymbols,
    Unicode,
}

/// Character-set registry threaded through generation calls.
///
/// A `Vocabulary` is a plain value: cloning one is cheap and mutating a clone
/// never affects other calls. Classes missing from a partially built registry
/// fall back to the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    classes: HashMap<CharClass, CharSet>,
}

impl Vocabulary {
    /// Registry holding the built-in table for every class.
    pub fn builtin() -> Self {
        let classes = [
            CharClass::Numeric,
            CharClass::English,
            CharClass::Alphanumeric,
            CharClass::SpecialSymbols,
            CharClass::Unicode,
        ]
        .into_iter()
        .map(|class| (class, builtin_charset(class)))
        .collect();
        Self { classes }
    }

    /// Character set registered for `class`, falling back to the built-in
    /// table when the class was never set on this registry.
    pub fn charset(&self, class: CharClass) -> CharSet {
        self.classes
            .get(&class)
            .cloned()
            .unwrap_or_else(|| builtin_charset(class))
    }

    /// Replaces the character set for one class on this registry.
    pub fn set(&mut self, class: CharClass, charset: CharSet) {
        self.classes.insert(class, charset);
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_charset(class: CharClass) -> CharSet {
    match class {
        CharClass::Numeric => CharSet::range('0', '9'),
        CharClass::English => CharSet::range('a', 'z').union(&CharSet::range('A', 'Z')),
        CharClass::Alphanumeric => {
            builtin_charset(CharClass::English).union(&builtin_charset(CharClass::Numeric))
        }
        CharClass::SpecialSymbols => CharSet::from_chars(SPECIAL_SYMBOLS),
        CharClass::Unicode => unicode_charset(),
    }
}

/// Letters from several scripts plus symbols and supplementary-plane
/// characters that need more than one code unit in UTF-16 targets.
fn unicode_charset() -> CharSet {
    [
        CharSet::range('a', 'z'),
        CharSet::range('A', 'Z'),
        CharSet::range('0', '9'),
        CharSet::from_chars(SPECIAL_SYMBOLS),
        CharSet::range('\u{0391}', '\u{03A1}'), // Greek capitals up to rho
        CharSet::range('\u{03B1}', '\u{03C9}'), // Greek lowercase
        CharSet::range('\u{0410}', '\u{044F}'), // Cyrillic
        CharSet::range('\u{05D0}', '\u{05EA}'), // Hebrew
        CharSet::range('\u{3042}', '\u{3093}'), // Hiragana
        CharSet::range('\u{4E00}', '\u{4FF0}'), // CJK ideographs, first block
        CharSet::range('\u{1D400}', '\u{1D419}'), // mathematical bold capitals
        CharSet::range('\u{1F600}', '\u{1F64F}'), // emoticons
    ]
    .into_iter()
    .fold(CharSet::default(), |acc, set| acc.union(&set))
}

static DEFAULT: LazyLock<RwLock<Vocabulary>> = LazyLock::new(|| RwLock::new(Vocabulary::builtin()));

/// Snapshot of the process-wide vocabulary.
///
/// Each generation call takes one snapshot up front, so its reads stay
/// consistent even when another thread overrides a class mid-call. A racing
/// override may land before or after the snapshot; either table is valid for
/// that call.
pub fn snapshot() -> Vocabulary {
    let guard = DEFAULT.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Globally overrides one character class for all subsequent calls.
pub fn set(class: CharClass, charset: CharSet) {
    debug!(?class, size = charset.len(), "overriding vocabulary class");
    let mut guard = DEFAULT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.set(class, charset);
}

/// Replaces the whole process-wide vocabulary.
pub fn replace(vocabulary: Vocabulary) {
    debug!("replacing process-wide vocabulary");
    let mut guard = DEFAULT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = vocabulary;
}

/// Restores the built-in tables.
pub fn reset() {
    replace(Vocabulary::builtin());
}
