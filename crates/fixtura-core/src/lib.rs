//! Core contracts for Fixtura.
//!
//! This crate defines the error taxonomy, character sets, and the
//! vocabulary registry shared by the generation engine and the short API.

pub mod charset;
pub mod error;
pub mod vocabulary;

pub use charset::CharSet;
pub use error::{GenerationError, Result};
pub use vocabulary::{CharClass, Vocabulary};
