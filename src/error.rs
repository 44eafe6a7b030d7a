//! Error types for the witness generator.
//!
//! The hash core only ever produces `InvalidArity` and `FieldReduction`;
//! the remaining variants belong to constant-table validation and to the
//! artifact/CLI layer.

use thiserror::Error;

/// All failure modes of the witness generator.
#[derive(Debug, Error)]
pub enum WitnessError {
    /// Preimage length does not match the hasher's configured arity.
    #[error("invalid preimage arity: expected {expected}, got {got}")]
    InvalidArity {
        /// Arity the hasher was constructed with.
        expected: usize,
        /// Length of the preimage actually supplied.
        got: usize,
    },

    /// Requested arity is not covered by the compiled parameter set.
    #[error("unsupported arity {0}: parameter set covers arity 2 only")]
    UnsupportedArity(usize),

    /// Input is not a base-10 integer and cannot be reduced into the field.
    #[error("cannot reduce {0:?} into the field: not a base-10 integer")]
    FieldReduction(String),

    /// Hex string contains non-hex characters.
    #[error("invalid hex string")]
    InvalidHex,

    /// Hex string has the wrong length.
    #[error("wrong hex length: expected {expected}, got {got}")]
    WrongLength {
        /// Expected character count.
        expected: usize,
        /// Actual character count.
        got: usize,
    },

    /// Hex value is not a canonical field element (>= modulus).
    #[error("non-canonical field element: {0}")]
    NonCanonicalHex(String),

    /// Artifact file could not be written or read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for witness generator operations.
pub type WitnessResult<T> = Result<T, WitnessError>;
