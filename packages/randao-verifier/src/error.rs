//! Error types for RANDAO verification

use alloy_primitives::B256;
use ethereum_header::HeaderDecodeError;

/// Reasons a RANDAO value is rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RandaoVerifierError {
    /// The header bytes could not be decoded
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] HeaderDecodeError),

    /// The block is older than the recent block hash window
    #[error("block {target} is too old to verify at height {current}")]
    TooOld {
        /// Height of the header
        target: u64,
        /// Current height of the chain context
        current: u64,
    },

    /// The block is not strictly before the current height
    #[error("block {target} is not older than the current height {current}")]
    NotOlderThanCurrent {
        /// Height of the header
        target: u64,
        /// Current height of the chain context
        current: u64,
    },

    /// The header hash disagrees with the chain context
    #[error("header hash {actual} does not match the trusted block hash {expected}")]
    HashMismatch {
        /// Hash from the chain context
        expected: B256,
        /// Hash of the header bytes
        actual: B256,
    },

    /// The chain context has no hash for a block inside its window
    #[error("no block hash available for block {number}")]
    BlockHashUnavailable {
        /// Height that was looked up
        number: u64,
    },

    /// The header hash disagrees with the hash claimed by the witness
    #[error("header hash {computed} does not match the witness block hash {claimed}")]
    RlpHashMismatch {
        /// Hash claimed by the witness
        claimed: B256,
        /// Hash of the header bytes
        computed: B256,
    },

    /// The witness validator did not accept the witness
    #[error("witness for block {block_number} was rejected")]
    WitnessRejected {
        /// Block number of the witness
        block_number: u64,
    },
}

/// Errors raised while building a [`RecentBlockHashes`](crate::RecentBlockHashes) context
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockHashHistoryError {
    /// The block is outside of the window retained at the current height
    #[error("block {number} is outside the block hash window at height {current}")]
    OutsideWindow {
        /// Height of the inserted hash
        number: u64,
        /// Current height of the context
        current: u64,
    },
}
