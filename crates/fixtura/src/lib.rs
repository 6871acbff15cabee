//! Random test-fixture value generation.
//!
//! Fixtura produces bounded integers, strings over configurable character
//! vocabularies, temporals within a range, and uniform samples from
//! collections. Requests are immutable values built through [`RandomValue`]
//! (or the one-line wrappers in [`short`]); every precondition is checked at
//! the terminal call and reported as a typed [`GenerationError`].
//!
//! ```no_run
//! use fixtura::{length, modifier};
//!
//! # fn main() -> fixtura::Result<()> {
//! let code = length(8).with(modifier::special_symbol()).alphanumeric()?;
//! assert_eq!(code.chars().count(), 8);
//! # Ok(())
//! # }
//! ```

pub mod modifier;
pub mod range;
pub mod request;
pub mod sample;
pub mod short;
pub mod string;
pub mod temporal;

pub use fixtura_core::{CharClass, CharSet, GenerationError, Result, Vocabulary, vocabulary};
pub use modifier::StringModifier;
pub use request::{RandomValue, between, length, up_to};
pub use temporal::RandomTemporal;
