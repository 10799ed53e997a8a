//! This module defines [`HeaderEncodingError`] and [`HeaderDecodeError`].

use alloy_primitives::B256;

use crate::fields::HeaderLayout;

/// Errors raised while normalizing and encoding raw header fields
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderEncodingError {
    /// The field is missing its `0x` prefix
    #[error("field `{field}` is not a hex string: {value}")]
    NotHexPrefixed {
        /// JSON-RPC name of the field
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// The field has a `0x` prefix but non-hex digits
    #[error("field `{field}` contains invalid hex digits: {value}")]
    InvalidHex {
        /// JSON-RPC name of the field
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// A fixed-width field does not have the expected byte length
    #[error("field `{field}` must be {expected} bytes long but is {found} bytes")]
    InvalidLength {
        /// JSON-RPC name of the field
        field: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Length found after normalization
        found: usize,
    },

    /// A scalar field does not fit in 256 bits
    #[error("scalar field `{field}` is {found} bytes long, at most {max} bytes are allowed")]
    ScalarTooLarge {
        /// JSON-RPC name of the field
        field: &'static str,
        /// Maximum length in bytes
        max: usize,
        /// Length found after normalization
        found: usize,
    },

    /// An optional trailing field is present while an earlier one is absent
    #[error("optional field `{field}` is present but the preceding field `{missing}` is absent")]
    NonContiguousOptionalField {
        /// The present field
        field: &'static str,
        /// The absent field that precedes it
        missing: &'static str,
    },

    /// Only part of the fields introduced by a fork are present
    #[error("{layout:?} header is missing field `{missing}`")]
    IncompleteLayout {
        /// The layout implied by the fields that are present
        layout: HeaderLayout,
        /// The first absent field of that layout
        missing: &'static str,
    },

    /// The canonical encoding does not hash to the block hash reported by the data source
    #[error("canonical header hash {computed} does not match the claimed block hash {claimed}")]
    ClaimedHashMismatch {
        /// Hash reported alongside the fields
        claimed: B256,
        /// Hash of the canonical encoding
        computed: B256,
    },
}

/// Errors raised while reading fields back out of canonical header bytes
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderDecodeError {
    /// Low level RLP error
    #[error("malformed header rlp: {0}")]
    Rlp(#[from] alloy_rlp::Error),

    /// The outer item is a string instead of a list
    #[error("header rlp must be a list")]
    NotAList,

    /// Bytes follow the header list
    #[error("header rlp is followed by {0} trailing bytes")]
    TrailingBytes(usize),

    /// A header field is itself a list
    #[error("header field at index {index} is a list, expected a byte string")]
    NestedList {
        /// Position of the field in the header list
        index: usize,
    },

    /// The list is shorter than the pre-London header
    #[error("header has {found} fields but at least {expected} are required")]
    TooFewFields {
        /// Minimum number of fields
        expected: usize,
        /// Number of fields found
        found: usize,
    },
}
