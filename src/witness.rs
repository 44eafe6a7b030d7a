//! Witness input artifact.
//!
//! The JSON shape consumed by the circuit witness generator:
//!
//! ```json
//! {
//!   "preimage": ["123456789", "987654321"],
//!   "hash": "168324212719612225509791739964859957113428238103..."
//! }
//! ```
//!
//! Field values are base-10 decimal strings, never JSON numbers, because
//! they exceed native integer range. The output key is canonically `hash`.

use crate::error::WitnessResult;
use crate::field::Fr;
use crate::poseidon::PoseidonHasher;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The witness input artifact: preimage and hash as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessInput {
    /// Preimage elements, base-10 encoded.
    pub preimage: Vec<String>,
    /// Poseidon hash of the preimage, base-10 encoded.
    pub hash: String,
}

impl WitnessInput {
    /// Build the artifact from decimal preimage strings.
    ///
    /// Each element is reduced into the field before hashing, and the
    /// recorded preimage is the reduced canonical form, so the artifact is
    /// always internally consistent.
    pub fn generate(preimage: &[String]) -> WitnessResult<WitnessInput> {
        let hasher = PoseidonHasher::new(preimage.len())?;

        let elements = preimage
            .iter()
            .map(|s| Fr::from_decimal(s))
            .collect::<WitnessResult<Vec<Fr>>>()?;

        let hash = hasher.hash(&elements)?;

        Ok(WitnessInput {
            preimage: elements.iter().map(Fr::to_decimal).collect(),
            hash: hash.to_decimal(),
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> WitnessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the artifact to `path` as pretty-printed JSON.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> WitnessResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read an artifact back from `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> WitnessResult<WitnessInput> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WitnessError;

    #[test]
    fn test_generate_consistency() {
        let input =
            WitnessInput::generate(&["123456789".to_string(), "987654321".to_string()]).unwrap();
        assert_eq!(input.preimage, vec!["123456789", "987654321"]);

        // hash field must match recomputation over the recorded preimage
        let elements: Vec<Fr> = input
            .preimage
            .iter()
            .map(|s| Fr::from_decimal(s).unwrap())
            .collect();
        let hasher = PoseidonHasher::new(2).unwrap();
        assert_eq!(hasher.hash(&elements).unwrap().to_decimal(), input.hash);
    }

    #[test]
    fn test_generate_rejects_wrong_arity() {
        assert!(matches!(
            WitnessInput::generate(&["1".to_string()]),
            Err(WitnessError::UnsupportedArity(1))
        ));
    }

    #[test]
    fn test_generate_rejects_malformed() {
        let result =
            WitnessInput::generate(&["123".to_string(), "not-a-number".to_string()]);
        assert!(matches!(result, Err(WitnessError::FieldReduction(_))));
    }

    #[test]
    fn test_json_shape() {
        let input =
            WitnessInput::generate(&["1".to_string(), "2".to_string()]).unwrap();
        let json = input.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object["preimage"].is_array());
        // decimal strings, never numbers
        assert!(object["preimage"][0].is_string());
        assert!(object["hash"].is_string());
    }
}
