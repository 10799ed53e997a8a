//! Read-only view of the execution environment's recent block hashes.

use std::collections::BTreeMap;

use alloy_primitives::B256;
use randao_accessor_utils::ensure;
use serde::{Deserialize, Serialize};

use crate::error::BlockHashHistoryError;

/// Number of past block hashes the execution environment retains
pub const BLOCK_HASH_HISTORY_LENGTH: u64 = 256;

/// Source of the current height and the hashes of the blocks before it
pub trait BlockHashHistory {
    /// Height of the block currently being executed
    fn current_height(&self) -> u64;

    /// Hash of block `number`, if it is retained
    fn block_hash(&self, number: u64) -> Option<B256>;
}

/// Returns whether `number` is within the window retained at `current`
#[must_use]
pub const fn in_window(number: u64, current: u64) -> bool {
    number < current && current - number <= BLOCK_HASH_HISTORY_LENGTH
}

/// In-memory [`BlockHashHistory`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBlockHashes {
    /// Height of the block currently being executed
    pub current_height: u64,
    /// Known block hashes by block number
    #[serde(default)]
    pub block_hashes: BTreeMap<u64, B256>,
}

impl RecentBlockHashes {
    /// Creates an empty context at `current_height`
    #[must_use]
    pub const fn new(current_height: u64) -> Self {
        Self {
            current_height,
            block_hashes: BTreeMap::new(),
        }
    }

    /// Records the hash of block `number`.
    /// # Errors
    /// Returns an error if `number` is outside of the window retained at the current height.
    pub fn insert(&mut self, number: u64, hash: B256) -> Result<(), BlockHashHistoryError> {
        ensure!(
            in_window(number, self.current_height),
            BlockHashHistoryError::OutsideWindow {
                number,
                current: self.current_height,
            }
        );
        self.block_hashes.insert(number, hash);
        Ok(())
    }

    /// Builder form of [`Self::insert`]
    /// # Errors
    /// See [`Self::insert`].
    pub fn with_block_hash(
        mut self,
        number: u64,
        hash: B256,
    ) -> Result<Self, BlockHashHistoryError> {
        self.insert(number, hash)?;
        Ok(self)
    }
}

impl BlockHashHistory for RecentBlockHashes {
    fn current_height(&self) -> u64 {
        self.current_height
    }

    fn block_hash(&self, number: u64) -> Option<B256> {
        if !in_window(number, self.current_height) {
            return None;
        }
        self.block_hashes.get(&number).copied()
    }
}
