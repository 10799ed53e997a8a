//! Witnesses for historical block hashes and the validators that vouch for them.

use std::collections::BTreeMap;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Accumulator attestation that `claimed_block_hash` is the hash of block `block_number`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHashWitness {
    /// Attested block number
    pub block_number: u64,
    /// Attested block hash
    pub claimed_block_hash: B256,
    /// Hash of the block before the attested one
    pub prev_hash: B256,
    /// Number of finalized blocks covered by the accumulator root
    pub num_final: u64,
    /// Merkle path from the block hash to the accumulator root
    #[serde(default)]
    pub merkle_proof: Vec<B256>,
}

/// Accept or reject verdict of the accumulator service on a witness.
///
/// The proof inside the witness is never inspected by the verifier, only this verdict is.
pub trait WitnessValidator {
    /// Returns whether the accumulator accepts `witness`
    fn is_block_hash_valid(&self, witness: &BlockHashWitness) -> bool;
}

/// [`WitnessValidator`] accepting the `(block_number, block_hash)` pairs the accumulator has
/// already attested to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttestedBlockHashes(BTreeMap<u64, B256>);

impl AttestedBlockHashes {
    /// Records an attested block hash, replacing any previous hash for the same block
    pub fn insert(&mut self, block_number: u64, block_hash: B256) {
        self.0.insert(block_number, block_hash);
    }

    /// Number of attested blocks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no block is attested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u64, B256)> for AttestedBlockHashes {
    fn from_iter<I: IntoIterator<Item = (u64, B256)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl WitnessValidator for AttestedBlockHashes {
    fn is_block_hash_valid(&self, witness: &BlockHashWitness) -> bool {
        self.0.get(&witness.block_number) == Some(&witness.claimed_block_hash)
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::{b256, B256};

    use super::*;

    fn witness(block_number: u64, claimed_block_hash: B256) -> BlockHashWitness {
        BlockHashWitness {
            block_number,
            claimed_block_hash,
            prev_hash: B256::ZERO,
            num_final: 0,
            merkle_proof: vec![],
        }
    }

    #[test]
    fn test_attested_block_hashes() {
        let attested: AttestedBlockHashes = [(10, B256::repeat_byte(1)), (11, B256::repeat_byte(2))]
            .into_iter()
            .collect();

        assert_eq!(attested.len(), 2);
        assert!(attested.is_block_hash_valid(&witness(10, B256::repeat_byte(1))));
        assert!(!attested.is_block_hash_valid(&witness(10, B256::repeat_byte(2))));
        assert!(!attested.is_block_hash_valid(&witness(12, B256::repeat_byte(1))));
        assert!(!AttestedBlockHashes::default().is_block_hash_valid(&witness(10, B256::ZERO)));
    }

    #[test]
    fn test_deserialize_witness() {
        let witness: BlockHashWitness = serde_json::from_str(
            r#"{
                "blockNumber": 17699001,
                "claimedBlockHash": "0xbe4e917337bb1dfc18884345e218f1b9e83f74cbda5c227d8e858898d3e20e9a",
                "prevHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
                "numFinal": 17699000,
                "merkleProof": [
                    "0x0101010101010101010101010101010101010101010101010101010101010101"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(witness.block_number, 17_699_001);
        assert_eq!(
            witness.claimed_block_hash,
            b256!("be4e917337bb1dfc18884345e218f1b9e83f74cbda5c227d8e858898d3e20e9a")
        );
        assert_eq!(witness.merkle_proof, vec![B256::repeat_byte(1)]);
    }
}
