//! The recent and historical RANDAO verification paths

use alloy_primitives::{keccak256, B256};
use ethereum_header::DecodedHeader;
use randao_accessor_utils::ensure;
use serde::{Deserialize, Serialize};

use crate::{
    chain_context::{BlockHashHistory, BLOCK_HASH_HISTORY_LENGTH},
    error::RandaoVerifierError,
    witness::{BlockHashWitness, WitnessValidator},
};

/// The trust tier that proved a RANDAO value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustPath {
    /// Proved by the recent block hash window of the chain context
    Recent,
    /// Proved by an accumulator witness
    Historical,
}

/// A RANDAO value together with the block it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedRandao {
    /// Number of the block
    pub block_number: u64,
    /// Hash of the block
    pub block_hash: B256,
    /// The `mixHash` of the block
    pub randao: B256,
    /// How the block hash was trusted
    pub trust_path: TrustPath,
}

/// Verifies the RANDAO value of a block within the recent block hash window.
///
/// The block must be strictly before the current height and at most
/// [`BLOCK_HASH_HISTORY_LENGTH`] blocks behind it. Its hash must equal the hash `history`
/// holds for that height.
///
/// # Errors
/// Returns an error if:
/// - The header bytes are not a well formed header
/// - The block is too old for the window, see [`RandaoVerifierError::TooOld`]
/// - The block is not older than the current height
/// - The history has no hash for the block or a different one
pub fn verify_recent<H>(
    history: &H,
    header_rlp: &[u8],
) -> Result<VerifiedRandao, RandaoVerifierError>
where
    H: BlockHashHistory + ?Sized,
{
    let block_hash = keccak256(header_rlp);
    let header = DecodedHeader::decode(header_rlp)?;
    let target = header.number;
    let current = history.current_height();

    if current.saturating_sub(target) > BLOCK_HASH_HISTORY_LENGTH {
        tracing::warn!(
            block_number = target,
            current,
            "block is outside the recent block hash window"
        );
        return Err(RandaoVerifierError::TooOld { target, current });
    }
    if target >= current {
        tracing::warn!(
            block_number = target,
            current,
            "block is not older than the current height"
        );
        return Err(RandaoVerifierError::NotOlderThanCurrent { target, current });
    }

    let Some(expected) = history.block_hash(target) else {
        tracing::warn!(block_number = target, current, "no block hash available");
        return Err(RandaoVerifierError::BlockHashUnavailable { number: target });
    };
    if expected != block_hash {
        tracing::warn!(
            block_number = target,
            %expected,
            actual = %block_hash,
            "block hash mismatch"
        );
        return Err(RandaoVerifierError::HashMismatch {
            expected,
            actual: block_hash,
        });
    }

    tracing::debug!(
        block_number = target,
        %block_hash,
        randao = %header.mix_hash,
        "verified recent randao"
    );

    Ok(VerifiedRandao {
        block_number: target,
        block_hash,
        randao: header.mix_hash,
        trust_path: TrustPath::Recent,
    })
}

/// Verifies the RANDAO value of a block whose hash is attested by an accumulator witness.
///
/// No age limit applies. `validator` decides whether the witness is trusted at all, the header
/// bytes must then hash to the witness's claimed block hash.
///
/// # Errors
/// Returns an error if:
/// - The validator rejects the witness
/// - The header hash does not match [`BlockHashWitness::claimed_block_hash`]
/// - The header bytes are not a well formed header
pub fn verify_historical<W>(
    validator: &W,
    header_rlp: &[u8],
    witness: &BlockHashWitness,
) -> Result<VerifiedRandao, RandaoVerifierError>
where
    W: WitnessValidator + ?Sized,
{
    let block_hash = keccak256(header_rlp);

    if !validator.is_block_hash_valid(witness) {
        tracing::warn!(block_number = witness.block_number, "witness rejected");
        return Err(RandaoVerifierError::WitnessRejected {
            block_number: witness.block_number,
        });
    }
    if block_hash != witness.claimed_block_hash {
        tracing::warn!(
            block_number = witness.block_number,
            claimed = %witness.claimed_block_hash,
            computed = %block_hash,
            "header does not match the witness"
        );
        return Err(RandaoVerifierError::RlpHashMismatch {
            claimed: witness.claimed_block_hash,
            computed: block_hash,
        });
    }

    let header = DecodedHeader::decode(header_rlp)?;
    ensure!(
        header.number == witness.block_number,
        RandaoVerifierError::WitnessRejected {
            block_number: witness.block_number,
        }
    );

    tracing::debug!(
        block_number = header.number,
        %block_hash,
        randao = %header.mix_hash,
        "verified historical randao"
    );

    Ok(VerifiedRandao {
        block_number: header.number,
        block_hash,
        randao: header.mix_hash,
        trust_path: TrustPath::Historical,
    })
}
