//! Fixed-arity Poseidon hasher.
//!
//! One permutation call per hash: the state is seeded with a zero capacity
//! element followed by the preimage, and the output is the first element of
//! the permuted state. This is circomlib's `poseidon(inputs)`, not a sponge.

use super::{permute, RATE, WIDTH};
use crate::error::{WitnessError, WitnessResult};
use crate::field::Fr;

/// Poseidon hasher with an explicit, immutable arity.
///
/// The arity is fixed at construction; [`PoseidonHasher::hash`] rejects any
/// preimage whose length differs. The compiled parameter set covers t = 3,
/// so only arity 2 is constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseidonHasher {
    arity: usize,
}

impl PoseidonHasher {
    /// Create a hasher for the given arity.
    ///
    /// Fails with [`WitnessError::UnsupportedArity`] for any arity other
    /// than 2, since the constant tables are generated for t = 3.
    pub fn new(arity: usize) -> WitnessResult<Self> {
        if arity != RATE {
            return Err(WitnessError::UnsupportedArity(arity));
        }
        Ok(Self { arity })
    }

    /// The arity this hasher was constructed with.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Hash a preimage of exactly `arity` field elements.
    ///
    /// State layout: `[0, in_0, ..., in_{arity-1}]` (capacity element first,
    /// seeded with zero). The hash is state[0] after the permutation.
    pub fn hash(&self, preimage: &[Fr]) -> WitnessResult<Fr> {
        if preimage.len() != self.arity {
            return Err(WitnessError::InvalidArity {
                expected: self.arity,
                got: preimage.len(),
            });
        }

        let mut state = [Fr::ZERO; WIDTH];
        for (slot, &input) in state[1..].iter_mut().zip(preimage) {
            *slot = input;
        }

        Ok(permute(&state)[0])
    }
}

/// Hash two field elements with the standard arity-2 instance.
pub fn hash2(a: Fr, b: Fr) -> Fr {
    let state = [Fr::ZERO, a, b];
    permute(&state)[0]
}
