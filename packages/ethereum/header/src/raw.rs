//! This module defines [`RawHeaderFields`], the header of a block as returned by JSON-RPC.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::{
    canonical::{canonicalize, CanonicalHeaderBytes},
    error::HeaderEncodingError,
    fields::{fixed, optional, HeaderFields},
};

/// Header fields of a block as returned by `eth_getBlockByHash` / `eth_getBlockByNumber`.
///
/// Every value is kept verbatim, exactly as the data source rendered it. Nothing here is
/// trusted: use [`RawHeaderFields::normalize`] to obtain the strictly typed [`HeaderFields`],
/// or [`RawHeaderFields::canonicalize`] to go straight to the canonical RLP bytes.
///
/// Fields are declared in header order. Keys of the block object that are not part of the
/// header (`transactions`, `size`, `totalDifficulty`, ...) are ignored.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawHeaderFields {
    /// The block hash claimed by the data source (not part of the encoding)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Parent block hash
    pub parent_hash: String,
    /// Ommers hash
    #[serde(alias = "ommersHash")]
    pub sha3_uncles: String,
    /// Fee recipient
    #[serde(alias = "coinbase")]
    pub miner: String,
    /// State root
    pub state_root: String,
    /// Transactions root
    pub transactions_root: String,
    /// Receipts root
    pub receipts_root: String,
    /// Logs bloom
    pub logs_bloom: String,
    /// Difficulty, zero after the merge
    pub difficulty: String,
    /// Block number
    pub number: String,
    /// Gas limit
    pub gas_limit: String,
    /// Gas used
    pub gas_used: String,
    /// Timestamp
    pub timestamp: String,
    /// Extra data
    pub extra_data: String,
    /// Mix hash, the RANDAO value after the merge
    pub mix_hash: String,
    /// Nonce, zero after the merge
    pub nonce: String,
    /// EIP-1559 base fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<String>,
    /// EIP-4895 withdrawals root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals_root: Option<String>,
    /// EIP-4844 blob gas used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_used: Option<String>,
    /// EIP-4844 excess blob gas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess_blob_gas: Option<String>,
    /// EIP-4788 parent beacon block root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_beacon_block_root: Option<String>,
    /// EIP-7685 requests hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_hash: Option<String>,
}

impl RawHeaderFields {
    /// Normalizes every field into its strict byte representation.
    /// # Errors
    /// Returns an error if a field is not valid hex or has the wrong width, or if the optional
    /// trailing fields do not form a known header layout.
    pub fn normalize(&self) -> Result<HeaderFields, HeaderEncodingError> {
        HeaderFields::try_from(self)
    }

    /// Normalizes the fields and encodes them as the canonical header RLP.
    /// # Errors
    /// See [`RawHeaderFields::normalize`].
    pub fn canonicalize(&self) -> Result<CanonicalHeaderBytes, HeaderEncodingError> {
        canonicalize(self)
    }

    /// Parses the block hash claimed by the data source, if it sent one.
    /// # Errors
    /// Returns an error if the claimed hash is not a 32 byte hex string.
    pub fn claimed_hash(&self) -> Result<Option<B256>, HeaderEncodingError> {
        optional(self.hash.as_deref(), |v| fixed("hash", v))
    }

    /// Like [`RawHeaderFields::canonicalize`], but also requires the encoding to hash to the
    /// claimed block hash when one is present.
    /// # Errors
    /// Returns [`HeaderEncodingError::ClaimedHashMismatch`] if the hashes differ, or any error
    /// of [`RawHeaderFields::canonicalize`].
    pub fn canonicalize_checked(&self) -> Result<CanonicalHeaderBytes, HeaderEncodingError> {
        let canonical = self.canonicalize()?;
        if let Some(claimed) = self.claimed_hash()? {
            canonical.ensure_hash(claimed)?;
        }
        Ok(canonical)
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::b256;
    use randao_test_utils::fixtures;
    use rstest::rstest;

    use super::RawHeaderFields;
    use crate::error::HeaderEncodingError;

    #[test]
    fn test_deserialize_rpc_block() {
        let raw: RawHeaderFields = fixtures::load("shanghai_block");

        assert_eq!(
            raw.hash.as_deref(),
            Some("0xbe4e917337bb1dfc18884345e218f1b9e83f74cbda5c227d8e858898d3e20e9a")
        );
        assert_eq!(raw.number, "0x10e10b9");
        assert_eq!(raw.extra_data, "0x");
        assert!(raw.base_fee_per_gas.is_some());
        assert!(raw.withdrawals_root.is_some());
        assert!(raw.blob_gas_used.is_none());
        assert!(raw.requests_hash.is_none());
    }

    #[test]
    fn test_deserialize_legacy_block() {
        let raw: RawHeaderFields = fixtures::load("mainnet_genesis");

        assert_eq!(raw.nonce, "0x0000000000000042");
        assert!(raw.base_fee_per_gas.is_none());
        assert!(raw.withdrawals_root.is_none());
    }

    #[test]
    fn test_deserialize_aliases() {
        let mut block: serde_json::Value = fixtures::load("shanghai_block");
        let object = block.as_object_mut().unwrap();
        let ommers = object.remove("sha3Uncles").unwrap();
        let miner = object.remove("miner").unwrap();
        object.insert("ommersHash".to_string(), ommers.clone());
        object.insert("coinbase".to_string(), miner.clone());

        let raw: RawHeaderFields = serde_json::from_value(block).unwrap();
        assert_eq!(raw.sha3_uncles, ommers.as_str().unwrap());
        assert_eq!(raw.miner, miner.as_str().unwrap());
    }

    #[test]
    fn test_deserialize_missing_required_field() {
        let mut block: serde_json::Value = fixtures::load("shanghai_block");
        block.as_object_mut().unwrap().remove("mixHash");

        let res = serde_json::from_value::<RawHeaderFields>(block);
        assert!(res.unwrap_err().to_string().contains("mixHash"));
    }

    #[rstest]
    #[case::genesis("mainnet_genesis")]
    #[case::london("london_block")]
    #[case::shanghai("shanghai_block")]
    #[case::cancun("cancun_block")]
    fn test_canonicalize_checked(#[case] fixture: &str) {
        let raw: RawHeaderFields = fixtures::load(fixture);
        let canonical = raw.canonicalize_checked().unwrap();

        assert_eq!(Some(canonical.block_hash()), raw.claimed_hash().unwrap());
    }

    #[test]
    fn test_canonicalize_checked_without_claimed_hash() {
        let mut raw: RawHeaderFields = fixtures::load("shanghai_block");
        raw.hash = None;

        assert_eq!(raw.claimed_hash(), Ok(None));
        assert_eq!(raw.canonicalize_checked(), raw.canonicalize());
    }

    #[test]
    fn test_canonicalize_checked_wrong_claimed_hash() {
        let mut raw: RawHeaderFields = fixtures::load("shanghai_block");
        let next: RawHeaderFields = fixtures::load("shanghai_block_next");
        raw.hash = next.hash;

        assert_eq!(
            raw.canonicalize_checked(),
            Err(HeaderEncodingError::ClaimedHashMismatch {
                claimed: b256!("ffe62248b5cc0b944020ffc71e3c80192e69cdb229431342dfb60c5635a99970"),
                computed: b256!("be4e917337bb1dfc18884345e218f1b9e83f74cbda5c227d8e858898d3e20e9a"),
            })
        );
    }

    #[test]
    fn test_claimed_hash_invalid_length() {
        let mut raw: RawHeaderFields = fixtures::load("shanghai_block");
        raw.hash = Some("0xbe4e".to_string());

        assert_eq!(
            raw.claimed_hash(),
            Err(HeaderEncodingError::InvalidLength {
                field: "hash",
                expected: 32,
                found: 2,
            })
        );
    }
}
