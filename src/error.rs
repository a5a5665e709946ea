//! Error types shared by every cipher and analysis operation.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or analysing text.
///
/// Every variant is a local, recoverable condition. No operation returns a
/// partial result alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character was malformed for the operation (non-alphabetic where a
    /// letter is required, non-binary where a bit is required, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An ordinal fell outside `0..=25`.
    #[error("Ordinal {0} is outside the range 0..=25")]
    OutOfRange(i64),

    /// The key has the wrong length or shape, or cannot be used.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Two paired sequences have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// No modular inverse exists.
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible {
        /// Value that was to be inverted.
        value: i64,
        /// Modulus.
        modulus: i64,
    },

    /// The sequence is too short for the statistic.
    #[error("Insufficient data: need at least {needed} characters, got {got}")]
    InsufficientData {
        /// Minimum length required.
        needed: usize,
        /// Length supplied.
        got: usize,
    },
}
