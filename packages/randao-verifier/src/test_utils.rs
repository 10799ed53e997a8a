//! Witness validators for tests

use crate::witness::{BlockHashWitness, WitnessValidator};

/// Accepts every witness
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

/// Rejects every witness
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl WitnessValidator for AcceptAll {
    fn is_block_hash_valid(&self, _witness: &BlockHashWitness) -> bool {
        true
    }
}

impl WitnessValidator for RejectAll {
    fn is_block_hash_valid(&self, _witness: &BlockHashWitness) -> bool {
        false
    }
}
