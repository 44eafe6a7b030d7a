//! Poseidon permutation.
//!
//! The permutation applies 65 rounds total:
//! - 4 full rounds (all elements get S-box)
//! - 57 partial rounds (only first element gets S-box)
//! - 4 full rounds
//!
//! Each round, in circomlib order:
//! 1. Round constant addition
//! 2. S-box (x^5)
//! 3. MDS matrix multiplication

use super::{FULL_ROUNDS, MDS_MATRIX, PARTIAL_ROUNDS, ROUND_CONSTANTS, WIDTH};
use crate::field::Fr;
use std::sync::OnceLock;

/// Constant tables parsed from hex into field elements.
struct ParsedConstants {
    mds: [[Fr; WIDTH]; WIDTH],
    round_constants: Vec<[Fr; WIDTH]>,
}

impl ParsedConstants {
    /// Parse the hex tables. A malformed entry means the compiled-in tables
    /// are corrupt, which is unrecoverable.
    fn new() -> Self {
        let mut mds = [[Fr::ZERO; WIDTH]; WIDTH];
        for i in 0..WIDTH {
            for j in 0..WIDTH {
                match Fr::from_hex(MDS_MATRIX[i][j]) {
                    Ok(v) => mds[i][j] = v,
                    Err(e) => unreachable!("corrupt MDS[{i}][{j}]: {e}"),
                }
            }
        }

        let mut round_constants = Vec::with_capacity(FULL_ROUNDS + PARTIAL_ROUNDS);
        for (round, row) in ROUND_CONSTANTS.iter().enumerate() {
            let mut constants = [Fr::ZERO; WIDTH];
            for (i, hex) in row.iter().enumerate() {
                match Fr::from_hex(hex) {
                    Ok(v) => constants[i] = v,
                    Err(e) => unreachable!("corrupt round constant [{round}][{i}]: {e}"),
                }
            }
            round_constants.push(constants);
        }

        Self {
            mds,
            round_constants,
        }
    }
}

fn get_constants() -> &'static ParsedConstants {
    static CONSTANTS: OnceLock<ParsedConstants> = OnceLock::new();
    CONSTANTS.get_or_init(ParsedConstants::new)
}

/// Apply the S-box (x^5) to a field element.
#[inline]
fn sbox(x: Fr) -> Fr {
    x.pow5()
}

/// MDS matrix multiplication: state' = MDS * state
fn apply_mds(state: &[Fr; WIDTH]) -> [Fr; WIDTH] {
    let constants = get_constants();
    let mut result = [Fr::ZERO; WIDTH];

    for i in 0..WIDTH {
        let mut sum = Fr::ZERO;
        for j in 0..WIDTH {
            sum = sum + constants.mds[i][j] * state[j];
        }
        result[i] = sum;
    }

    result
}

/// Add the round constants for `round` to the state.
fn add_round_constants(state: &mut [Fr; WIDTH], round: usize) {
    let constants = get_constants();
    for i in 0..WIDTH {
        state[i] = state[i] + constants.round_constants[round][i];
    }
}

/// Full round: add constants, S-box on all elements, then MDS.
fn full_round(state: &mut [Fr; WIDTH], round: usize) {
    add_round_constants(state, round);

    for i in 0..WIDTH {
        state[i] = sbox(state[i]);
    }

    *state = apply_mds(state);
}

/// Partial round: add constants, S-box on first element only, then MDS.
fn partial_round(state: &mut [Fr; WIDTH], round: usize) {
    add_round_constants(state, round);

    state[0] = sbox(state[0]);

    *state = apply_mds(state);
}

/// Complete Poseidon permutation.
///
/// Runs:
/// 1. First half of full rounds (RF/2 = 4)
/// 2. All partial rounds (RP = 57)
/// 3. Second half of full rounds (RF/2 = 4)
pub fn permute(state: &[Fr; WIDTH]) -> [Fr; WIDTH] {
    let mut st = *state;
    let half_full = FULL_ROUNDS / 2;
    let mut round = 0;

    for _ in 0..half_full {
        full_round(&mut st, round);
        round += 1;
    }

    for _ in 0..PARTIAL_ROUNDS {
        partial_round(&mut st, round);
        round += 1;
    }

    for _ in 0..half_full {
        full_round(&mut st, round);
        round += 1;
    }

    st
}

/// Poseidon permutation with per-round trace output.
///
/// Returns (final_state, round_traces) where each trace entry contains
/// the state after that round. Used to localize a divergence against a
/// reference implementation round by round.
pub fn permute_with_trace(state: &[Fr; WIDTH]) -> ([Fr; WIDTH], Vec<[Fr; WIDTH]>) {
    let mut st = *state;
    let half_full = FULL_ROUNDS / 2;
    let mut round = 0;
    let mut traces = Vec::with_capacity(FULL_ROUNDS + PARTIAL_ROUNDS);

    for _ in 0..half_full {
        full_round(&mut st, round);
        traces.push(st);
        round += 1;
    }

    for _ in 0..PARTIAL_ROUNDS {
        partial_round(&mut st, round);
        traces.push(st);
        round += 1;
    }

    for _ in 0..half_full {
        full_round(&mut st, round);
        traces.push(st);
        round += 1;
    }

    (st, traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_parse() {
        let constants = get_constants();
        assert_eq!(constants.round_constants.len(), FULL_ROUNDS + PARTIAL_ROUNDS);
    }

    #[test]
    fn test_permute_deterministic() {
        let state = [Fr::ZERO, Fr::ONE, Fr::from_u64(2)];
        let result1 = permute(&state);
        let result2 = permute(&state);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_permute_changes_zero_state() {
        // Round constants move even the all-zero state
        let state = [Fr::ZERO; WIDTH];
        assert_ne!(permute(&state), state);
    }

    #[test]
    fn test_permute_with_trace_length() {
        let state = [Fr::ZERO, Fr::ONE, Fr::from_u64(2)];
        let (final_state, traces) = permute_with_trace(&state);
        assert_eq!(traces.len(), FULL_ROUNDS + PARTIAL_ROUNDS);
        assert_eq!(final_state, traces[traces.len() - 1]);
        assert_eq!(final_state, permute(&state));
    }
}
