//! BN254 scalar field element (Fr).
//!
//! Wraps `ark_bn254::Fr` with explicit decimal and hex conversions so that
//! every value entering or leaving the crate is a canonical representative
//! in [0, modulus).

use crate::error::{WitnessError, WitnessResult};
use ark_ff::{Field, PrimeField};
use num_bigint::BigUint;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A BN254 scalar field element.
///
/// Newtype wrapper around `ark_bn254::Fr`. Construction from external input
/// goes through [`Fr::from_decimal`] (reducing) or [`Fr::from_hex`]
/// (canonical-only); arithmetic is always modular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fr(ark_bn254::Fr);

impl Fr {
    /// The additive identity (zero).
    pub const ZERO: Fr = Fr(ark_bn254::Fr::ZERO);

    /// The multiplicative identity (one).
    pub const ONE: Fr = Fr(ark_bn254::Fr::ONE);

    /// Create an Fr from a u64 value.
    pub fn from_u64(val: u64) -> Fr {
        Fr(ark_bn254::Fr::from(val))
    }

    /// Parse a base-10 string of arbitrary length, reducing modulo the
    /// field order.
    ///
    /// Values at or above the modulus are reduced, never truncated. Strings
    /// containing anything but ASCII digits fail with
    /// [`WitnessError::FieldReduction`].
    pub fn from_decimal(s: &str) -> WitnessResult<Fr> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WitnessError::FieldReduction(s.to_string()));
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| WitnessError::FieldReduction(s.to_string()))?;
        Ok(Fr(ark_bn254::Fr::from(value)))
    }

    /// Parse a 64-character big-endian hex string into a canonical field
    /// element.
    ///
    /// Unlike [`Fr::from_decimal`] this rejects values at or above the
    /// modulus: the constant tables must hold exact published values, so a
    /// non-canonical entry is a corruption, not an input to reduce.
    pub fn from_hex(hex_str: &str) -> WitnessResult<Fr> {
        if hex_str.len() != 64 {
            return Err(WitnessError::WrongLength {
                expected: 64,
                got: hex_str.len(),
            });
        }
        let bytes = hex::decode(hex_str).map_err(|_| WitnessError::InvalidHex)?;
        let value = BigUint::from_bytes_be(&bytes);
        if value >= Fr::modulus() {
            return Err(WitnessError::NonCanonicalHex(hex_str.to_string()));
        }
        Ok(Fr(ark_bn254::Fr::from(value)))
    }

    /// Canonical base-10 representation, as consumed by circuit tooling.
    pub fn to_decimal(&self) -> String {
        BigUint::from(self.0).to_str_radix(10)
    }

    /// The field modulus as an arbitrary-precision integer.
    pub fn modulus() -> BigUint {
        BigUint::from(ark_bn254::Fr::MODULUS)
    }

    /// Compute x^5, the Poseidon S-box.
    pub fn pow5(&self) -> Fr {
        let x2 = self.0.square();
        let x4 = x2.square();
        Fr(x4 * self.0)
    }
}

impl Default for Fr {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Fr {
    fn from(val: u64) -> Self {
        Fr::from_u64(val)
    }
}

impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        Fr(self.0 + rhs.0)
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        Fr(self.0 - rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        Fr(self.0 * rhs.0)
    }
}

impl Neg for Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        Fr(-self.0)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one_decimal() {
        assert_eq!(Fr::ZERO.to_decimal(), "0");
        assert_eq!(Fr::ONE.to_decimal(), "1");
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(Fr::from_u64(42).to_decimal(), "42");
    }

    #[test]
    fn test_decimal_roundtrip() {
        let original = Fr::from_u64(123456789);
        let recovered = Fr::from_decimal(&original.to_decimal()).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_decimal_reduces_mod_p() {
        // modulus + 5 must land on 5
        let big = Fr::modulus() + 5u32;
        let reduced = Fr::from_decimal(&big.to_str_radix(10)).unwrap();
        assert_eq!(reduced, Fr::from_u64(5));
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!(matches!(
            Fr::from_decimal("12x34"),
            Err(WitnessError::FieldReduction(_))
        ));
        assert!(matches!(
            Fr::from_decimal(""),
            Err(WitnessError::FieldReduction(_))
        ));
        assert!(matches!(
            Fr::from_decimal("-5"),
            Err(WitnessError::FieldReduction(_))
        ));
    }

    #[test]
    fn test_hex_rejects_non_canonical() {
        // modulus itself, big-endian hex
        let modulus_hex = format!("{:064x}", Fr::modulus());
        assert!(matches!(
            Fr::from_hex(&modulus_hex),
            Err(WitnessError::NonCanonicalHex(_))
        ));
    }

    #[test]
    fn test_hex_rejects_wrong_length() {
        assert!(matches!(
            Fr::from_hex("abcd"),
            Err(WitnessError::WrongLength { expected: 64, .. })
        ));
    }

    #[test]
    fn test_arithmetic() {
        let a = Fr::from_u64(100);
        let b = Fr::from_u64(200);
        assert_eq!(a + b, Fr::from_u64(300));
        assert_eq!(Fr::from_u64(7) * Fr::from_u64(11), Fr::from_u64(77));
        assert_eq!(b - a, Fr::from_u64(100));
        assert_eq!(a + (-a), Fr::ZERO);
    }

    #[test]
    fn test_pow5() {
        assert_eq!(Fr::from_u64(3).pow5(), Fr::from_u64(243));
    }
}
