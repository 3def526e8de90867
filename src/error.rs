//! Error taxonomy shared across the crate.
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong constructing or evaluating a
/// distribution. All conditions are detected eagerly: parameter errors
/// at construction, input errors at call time. Evaluation itself is
/// deterministic and pure, so none of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A per-dimension parameter violates its invariant
    /// (`scale <= 0`, `low >= high`, or a truncation interval whose
    /// probability mass underflows to zero).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Parameter vectors of unequal length, or an input whose trailing
    /// axis does not match the distribution dimension.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// A probability argument outside `[0, 1]`.
    #[error("domain error: {0}")]
    DomainError(String),
}
