//! Contains the runner for the `encode` command.

use alloy_primitives::B256;
use anyhow::Result;
use ethereum_header::HeaderLayout;
use randao_accessor_utils::hex::to_hex;
use serde::{Deserialize, Serialize};

use crate::cli::BlockArgs;

/// The canonical encoding of a block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOutput {
    /// The block number.
    pub block_number: u64,
    /// The keccak-256 hash of the encoding.
    pub block_hash: B256,
    /// The block hash reported by the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_hash: Option<B256>,
    /// Whether the encoding hashes to the claimed hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_claimed: Option<bool>,
    /// The header layout of the block.
    pub layout: HeaderLayout,
    /// The `mixHash` of the block.
    pub randao: B256,
    /// The canonical header RLP, hex encoded.
    pub rlp: String,
}

/// Canonicalizes the header of a block file.
/// # Errors
/// Returns an error if the block cannot be read or its fields cannot be encoded.
pub fn run(args: &BlockArgs) -> Result<EncodeOutput> {
    let raw = super::read_block(&args.block)?;
    let fields = raw.normalize()?;
    let layout = fields.layout()?;
    let canonical = fields.encode_rlp()?;
    let decoded = canonical.decode()?;
    let block_hash = canonical.block_hash();
    let claimed_hash = raw.claimed_hash()?;

    tracing::info!(
        block_number = decoded.number,
        %block_hash,
        ?layout,
        "encoded header"
    );

    Ok(EncodeOutput {
        block_number: decoded.number,
        block_hash,
        claimed_hash,
        matches_claimed: claimed_hash.map(|claimed| claimed == block_hash),
        layout,
        randao: decoded.mix_hash,
        rlp: to_hex(canonical),
    })
}
