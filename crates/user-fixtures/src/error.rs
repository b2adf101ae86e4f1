//! Error types for the user-fixtures crate.
//!
//! Generation has two failure classes: validated configuration errors
//! (username length bounds, identifier length) and precondition violations
//! (an empty pool or an empty token). Both surface as [`GenerationError`].

use thiserror::Error;

/// Errors that can occur while generating fixture data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The username length bounds are inverted.
    #[error("maximum length {maximum} must not be less than minimum length {minimum}")]
    InvalidLengthBounds {
        /// Configured minimum length.
        minimum: usize,
        /// Configured maximum length.
        maximum: usize,
    },

    /// A selection pool contained no candidates.
    #[error("cannot draw from empty {pool} pool")]
    EmptyPool {
        /// Name of the pool that was empty.
        pool: &'static str,
    },

    /// An empty string was passed where a token was required.
    #[error("cannot capitalize an empty token")]
    EmptyToken,

    /// The identifier length cannot be represented exactly.
    #[error("identifier length must be between 1 and {max} digits, got {length}")]
    IdLengthOutOfRange {
        /// Requested number of digits.
        length: u32,
        /// Largest supported number of digits.
        max: u32,
    },
}
