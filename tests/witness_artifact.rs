//! Witness artifact tests.
//!
//! Verifies the JSON shape the circuit witness generator consumes: exactly
//! the `preimage` and `hash` keys, all field values as decimal strings.

use poseidon_witness::WitnessInput;

#[test]
fn artifact_has_canonical_shape() {
    let input =
        WitnessInput::generate(&["123456789".to_string(), "987654321".to_string()]).unwrap();
    let json = input.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2, "exactly two keys: preimage and hash");

    let preimage = object["preimage"].as_array().unwrap();
    assert_eq!(preimage.len(), 2);
    assert_eq!(preimage[0].as_str().unwrap(), "123456789");
    assert_eq!(preimage[1].as_str().unwrap(), "987654321");

    // the canonical output key is `hash`
    assert_eq!(
        object["hash"].as_str().unwrap(),
        "16832421271961222550979173996485995711342823810308835997146707681980704453417"
    );
}

#[test]
fn artifact_roundtrips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");

    let input = WitnessInput::generate(&["1".to_string(), "2".to_string()]).unwrap();
    input.write_to(&path).unwrap();

    let recovered = WitnessInput::read_from(&path).unwrap();
    assert_eq!(input, recovered);
}

#[test]
fn oversized_preimage_is_recorded_reduced() {
    // modulus + 5 must be recorded as its canonical representative 5
    let modulus =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    let big: num_bigint::BigUint =
        modulus.parse::<num_bigint::BigUint>().unwrap() + 5u32;

    let input = WitnessInput::generate(&[big.to_str_radix(10), "0".to_string()]).unwrap();
    assert_eq!(input.preimage[0], "5");

    let small = WitnessInput::generate(&["5".to_string(), "0".to_string()]).unwrap();
    assert_eq!(input.hash, small.hash);
}
