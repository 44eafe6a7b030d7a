//! Poseidon witness-input generator for BN254 circuits.
//!
//! Computes a Poseidon hash over a fixed-arity preimage of BN254 scalar
//! field elements and serializes the preimage and hash to the JSON artifact
//! consumed by a circuit witness generator.
//!
//! # Architecture
//!
//! - [`field`] - BN254 scalar field arithmetic (Fr)
//! - [`poseidon`] - Poseidon permutation and fixed-arity hasher
//! - [`witness`] - JSON witness-input artifact
//! - [`error`] - Error types
//!
//! # Conformance
//!
//! The permutation uses circomlib's published parameter set for arity 2
//! (t = 3, RF = 8, RP = 57) and reproduces circomlibjs outputs
//! bit-for-bit; see `tests/poseidon_vectors.rs` for the golden vectors.

// Hash outputs feed circuit witnesses; library code must not panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod poseidon;
pub mod witness;

// Re-export commonly used types
pub use error::{WitnessError, WitnessResult};
pub use field::Fr;
pub use poseidon::{hash2, PoseidonHasher};
pub use witness::WitnessInput;
