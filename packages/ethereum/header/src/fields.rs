//! This module defines [`HeaderFields`], the strictly typed form of [`RawHeaderFields`], and
//! the normalization rules that produce it.

use alloy_primitives::{hex, Address, Bloom, Bytes, FixedBytes, B256, B64};
use alloy_rlp::Encodable;
use randao_accessor_utils::{ensure, hex::strip_hex_prefix};
use serde::{Deserialize, Serialize};

use crate::{error::HeaderEncodingError, raw::RawHeaderFields};

/// Scalars are at most 256 bits wide
pub const MAX_SCALAR_BYTES: usize = 32;

/// Header shapes, named after the fork that introduced their last field
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLayout {
    /// The 15 pre-London fields
    Frontier,
    /// Adds `baseFeePerGas`
    London,
    /// Adds `withdrawalsRoot`
    Shanghai,
    /// Adds `blobGasUsed`, `excessBlobGas` and `parentBeaconBlockRoot`
    Cancun,
    /// Adds `requestsHash`
    Prague,
}

/// The optional trailing fields, in header order, with the layout that introduced them.
const OPTIONAL_FIELDS: [(&str, HeaderLayout); 6] = [
    ("baseFeePerGas", HeaderLayout::London),
    ("withdrawalsRoot", HeaderLayout::Shanghai),
    ("blobGasUsed", HeaderLayout::Cancun),
    ("excessBlobGas", HeaderLayout::Cancun),
    ("parentBeaconBlockRoot", HeaderLayout::Cancun),
    ("requestsHash", HeaderLayout::Prague),
];

impl HeaderLayout {
    /// Derives the layout from which optional trailing fields are present.
    ///
    /// # Errors
    /// Fails if a present field follows an absent one, or if a fork's fields are only
    /// partially present.
    fn detect(present: [bool; OPTIONAL_FIELDS.len()]) -> Result<Self, HeaderEncodingError> {
        let count = present.iter().take_while(|p| **p).count();

        if let Some(offset) = present[count..].iter().position(|p| *p) {
            return Err(HeaderEncodingError::NonContiguousOptionalField {
                field: OPTIONAL_FIELDS[count + offset].0,
                missing: OPTIONAL_FIELDS[count].0,
            });
        }

        let layout = count
            .checked_sub(1)
            .map_or(Self::Frontier, |last| OPTIONAL_FIELDS[last].1);

        if let Some(&(missing, next_layout)) = OPTIONAL_FIELDS.get(count) {
            ensure!(
                next_layout != layout,
                HeaderEncodingError::IncompleteLayout { layout, missing }
            );
        }

        Ok(layout)
    }
}

/// Header fields normalized into the byte strings that get RLP encoded.
///
/// Hashes, roots, the beneficiary, the bloom and the nonce are fixed width. Scalars keep the
/// exact bytes derived from their hex rendering (after zero normalization and odd-length
/// padding), since those bytes are what the block producer hashed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct HeaderFields {
    pub parent_hash: B256,
    pub ommers_hash: B256,
    pub beneficiary: Address,
    pub state_root: B256,
    pub transactions_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub difficulty: Bytes,
    pub number: Bytes,
    pub gas_limit: Bytes,
    pub gas_used: Bytes,
    pub timestamp: Bytes,
    pub extra_data: Bytes,
    /// The RANDAO value after the merge
    pub mix_hash: B256,
    pub nonce: B64,
    pub base_fee_per_gas: Option<Bytes>,
    pub withdrawals_root: Option<B256>,
    pub blob_gas_used: Option<Bytes>,
    pub excess_blob_gas: Option<Bytes>,
    pub parent_beacon_block_root: Option<B256>,
    pub requests_hash: Option<B256>,
}

impl HeaderFields {
    /// Returns the layout implied by the optional trailing fields.
    /// # Errors
    /// Returns an error if the optional fields are not contiguous or a fork's fields are only
    /// partially present.
    pub fn layout(&self) -> Result<HeaderLayout, HeaderEncodingError> {
        HeaderLayout::detect([
            self.base_fee_per_gas.is_some(),
            self.withdrawals_root.is_some(),
            self.blob_gas_used.is_some(),
            self.excess_blob_gas.is_some(),
            self.parent_beacon_block_root.is_some(),
            self.requests_hash.is_some(),
        ])
    }

    /// The RLP list items in header order. Absent optional fields are skipped, so the caller
    /// must have checked [`HeaderFields::layout`] first.
    pub(crate) fn rlp_items(&self) -> Vec<&dyn Encodable> {
        let mut items: Vec<&dyn Encodable> = vec![
            &self.parent_hash,
            &self.ommers_hash,
            &self.beneficiary,
            &self.state_root,
            &self.transactions_root,
            &self.receipts_root,
            &self.logs_bloom,
            &self.difficulty,
            &self.number,
            &self.gas_limit,
            &self.gas_used,
            &self.timestamp,
            &self.extra_data,
            &self.mix_hash,
            &self.nonce,
        ];

        let optional: [Option<&dyn Encodable>; OPTIONAL_FIELDS.len()] = [
            self.base_fee_per_gas.as_ref().map(|v| v as &dyn Encodable),
            self.withdrawals_root.as_ref().map(|v| v as &dyn Encodable),
            self.blob_gas_used.as_ref().map(|v| v as &dyn Encodable),
            self.excess_blob_gas.as_ref().map(|v| v as &dyn Encodable),
            self.parent_beacon_block_root.as_ref().map(|v| v as &dyn Encodable),
            self.requests_hash.as_ref().map(|v| v as &dyn Encodable),
        ];
        items.extend(optional.into_iter().flatten());

        items
    }
}

impl TryFrom<&RawHeaderFields> for HeaderFields {
    type Error = HeaderEncodingError;

    fn try_from(raw: &RawHeaderFields) -> Result<Self, Self::Error> {
        let fields = Self {
            parent_hash: fixed("parentHash", &raw.parent_hash)?,
            ommers_hash: fixed("sha3Uncles", &raw.sha3_uncles)?,
            beneficiary: fixed::<20>("miner", &raw.miner)?.into(),
            state_root: fixed("stateRoot", &raw.state_root)?,
            transactions_root: fixed("transactionsRoot", &raw.transactions_root)?,
            receipts_root: fixed("receiptsRoot", &raw.receipts_root)?,
            logs_bloom: fixed::<256>("logsBloom", &raw.logs_bloom)?.into(),
            difficulty: scalar("difficulty", &raw.difficulty)?,
            number: scalar("number", &raw.number)?,
            gas_limit: scalar("gasLimit", &raw.gas_limit)?,
            gas_used: scalar("gasUsed", &raw.gas_used)?,
            timestamp: scalar("timestamp", &raw.timestamp)?,
            extra_data: normalize_field("extraData", &raw.extra_data)?.into(),
            mix_hash: fixed("mixHash", &raw.mix_hash)?,
            nonce: fixed("nonce", &raw.nonce)?,
            base_fee_per_gas: optional(raw.base_fee_per_gas.as_deref(), |v| {
                scalar("baseFeePerGas", v)
            })?,
            withdrawals_root: optional(raw.withdrawals_root.as_deref(), |v| {
                fixed("withdrawalsRoot", v)
            })?,
            blob_gas_used: optional(raw.blob_gas_used.as_deref(), |v| scalar("blobGasUsed", v))?,
            excess_blob_gas: optional(raw.excess_blob_gas.as_deref(), |v| {
                scalar("excessBlobGas", v)
            })?,
            parent_beacon_block_root: optional(raw.parent_beacon_block_root.as_deref(), |v| {
                fixed("parentBeaconBlockRoot", v)
            })?,
            requests_hash: optional(raw.requests_hash.as_deref(), |v| fixed("requestsHash", v))?,
        };

        fields.layout()?;
        Ok(fields)
    }
}

/// Converts one JSON-RPC hex value into the bytes that represent it in the header.
///
/// - the value must start with `0x` (any case)
/// - `0x`, `0x0` and `0x00` are the scalar zero, which RLP encodes as the empty string
/// - an odd number of digits is left-padded with a single `0` nibble
/// - anything else is decoded as is
///
/// # Errors
/// Returns an error if the prefix is missing or the digits are not hexadecimal.
pub fn normalize_field(field: &'static str, value: &str) -> Result<Vec<u8>, HeaderEncodingError> {
    let digits = strip_hex_prefix(value).ok_or_else(|| HeaderEncodingError::NotHexPrefixed {
        field,
        value: value.to_string(),
    })?;

    let invalid_hex = || HeaderEncodingError::InvalidHex {
        field,
        value: value.to_string(),
    };
    ensure!(
        digits.bytes().all(|b| b.is_ascii_hexdigit()),
        invalid_hex()
    );

    if matches!(digits, "" | "0" | "00") {
        return Ok(Vec::new());
    }

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|_| invalid_hex())
}

pub(crate) fn fixed<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<FixedBytes<N>, HeaderEncodingError> {
    let bytes = normalize_field(field, value)?;
    FixedBytes::try_from(bytes.as_slice()).map_err(|_| HeaderEncodingError::InvalidLength {
        field,
        expected: N,
        found: bytes.len(),
    })
}

fn scalar(field: &'static str, value: &str) -> Result<Bytes, HeaderEncodingError> {
    let bytes = normalize_field(field, value)?;
    ensure!(
        bytes.len() <= MAX_SCALAR_BYTES,
        HeaderEncodingError::ScalarTooLarge {
            field,
            max: MAX_SCALAR_BYTES,
            found: bytes.len(),
        }
    );
    Ok(bytes.into())
}

pub(crate) fn optional<T>(
    value: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, HeaderEncodingError>,
) -> Result<Option<T>, HeaderEncodingError> {
    value.map(parse).transpose()
}
