//! Canonical RLP encoding of Ethereum execution block headers.
//!
//! JSON-RPC renders header fields as hex strings without a fixed width. This crate turns those
//! strings into the exact byte sequence the block producer hashed, so that
//! `keccak256(rlp) == block.hash` can be checked locally.

#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod canonical;
pub mod decode;
pub mod error;
pub mod fields;
pub mod raw;

pub use canonical::{canonicalize, CanonicalHeaderBytes};
pub use decode::DecodedHeader;
pub use error::{HeaderDecodeError, HeaderEncodingError};
pub use fields::{HeaderFields, HeaderLayout};
pub use raw::RawHeaderFields;
