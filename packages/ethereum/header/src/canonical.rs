//! This module provides [`canonicalize`], which turns JSON-RPC header fields into the RLP bytes
//! that hash to the block hash.

use alloy_primitives::{keccak256, Bytes, B256};
use alloy_rlp::{length_of_length, Encodable, Header};
use serde::{Deserialize, Serialize};

use crate::{
    decode::DecodedHeader,
    error::{HeaderDecodeError, HeaderEncodingError},
    fields::HeaderFields,
    raw::RawHeaderFields,
};

/// The RLP encoding of a header, exactly as the block producer hashed it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CanonicalHeaderBytes(Bytes);

impl CanonicalHeaderBytes {
    /// The encoded header
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper, returning the encoded header
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// The keccak-256 hash of the encoding, i.e. the block hash
    #[must_use]
    pub fn block_hash(&self) -> B256 {
        keccak256(&self.0)
    }

    /// Checks that the encoding hashes to `claimed`, returning the hash.
    /// # Errors
    /// Returns [`HeaderEncodingError::ClaimedHashMismatch`] if the hashes differ.
    pub fn ensure_hash(&self, claimed: B256) -> Result<B256, HeaderEncodingError> {
        let computed = self.block_hash();
        if computed != claimed {
            return Err(HeaderEncodingError::ClaimedHashMismatch { claimed, computed });
        }
        Ok(computed)
    }

    /// Decodes the block number and mix hash back out of the encoding.
    /// # Errors
    /// Returns an error if the bytes are not a well formed header list.
    pub fn decode(&self) -> Result<DecodedHeader, HeaderDecodeError> {
        DecodedHeader::decode(&self.0)
    }
}

impl AsRef<[u8]> for CanonicalHeaderBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl HeaderFields {
    /// Encodes the fields as an RLP list in header order.
    /// # Errors
    /// Returns an error if the optional trailing fields do not form a known layout.
    pub fn encode_rlp(&self) -> Result<CanonicalHeaderBytes, HeaderEncodingError> {
        self.layout()?;

        let items = self.rlp_items();
        let payload_length = items.iter().map(|item| item.length()).sum();

        let mut out = Vec::with_capacity(payload_length + length_of_length(payload_length));
        Header {
            list: true,
            payload_length,
        }
        .encode(&mut out);
        for item in items {
            item.encode(&mut out);
        }

        Ok(CanonicalHeaderBytes(out.into()))
    }
}

/// Normalizes the raw JSON-RPC fields and encodes them as the canonical header RLP.
///
/// Encoding is a pure function of `fields`: the same input always yields the same bytes.
///
/// # Errors
/// Returns an error if a field is not valid hex, a fixed-width field has the wrong length, a
/// scalar is wider than 256 bits, or the optional trailing fields do not form a known layout.
pub fn canonicalize(fields: &RawHeaderFields) -> Result<CanonicalHeaderBytes, HeaderEncodingError> {
    HeaderFields::try_from(fields)?.encode_rlp()
}
