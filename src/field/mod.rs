//! BN254 scalar field arithmetic.

mod fr;

pub use fr::Fr;

/// BN254 scalar field modulus as a decimal string.
pub const MODULUS_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";
