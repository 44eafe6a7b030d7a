//! Poseidon hash over the BN254 scalar field.
//!
//! Fixed-arity hash built on a single application of the Poseidon
//! permutation, parameterized exactly as circomlib's arity-2 instance so
//! that outputs match circuits compiled against circomlib.

mod constants;
mod hasher;
mod permute;

pub use constants::{MDS_MATRIX, ROUND_CONSTANTS};
pub use hasher::{hash2, PoseidonHasher};
pub use permute::{permute, permute_with_trace};

/// Poseidon state width (t = 3).
pub const WIDTH: usize = 3;

/// Number of preimage elements absorbed per hash (r = 2).
pub const RATE: usize = 2;

/// Capacity elements (c = 1).
pub const CAPACITY: usize = 1;

/// Number of full rounds (RF = 8).
pub const FULL_ROUNDS: usize = 8;

/// Number of partial rounds (RP = 57).
pub const PARTIAL_ROUNDS: usize = 57;

/// Total rounds (RF + RP = 65).
pub const TOTAL_ROUNDS: usize = FULL_ROUNDS + PARTIAL_ROUNDS;

/// S-box exponent (alpha = 5).
pub const SBOX_ALPHA: usize = 5;
