use thiserror::Error;

/// Errors reported by generation calls.
///
/// Every variant signals a usage mistake in the request itself: retrying the
/// same request cannot succeed, and a failed call produces no partial value.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A range, length, or count cannot be satisfied within the requested
    /// domain (min > max, negative length, bounds outside the output type,
    /// sample count larger than the population).
    #[error("out of domain: {0}")]
    OutOfDomain(String),
    /// A fixed prefix or suffix is longer than the string it is applied to.
    #[error("modifier length: {0}")]
    ModifierLength(String),
    /// A temporal endpoint string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience alias for results returned by Fixtura crates.
pub type Result<T> = std::result::Result<T, GenerationError>;
