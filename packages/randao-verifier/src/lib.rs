#![doc = "Verification of the RANDAO value (`mixHash`) carried by an Ethereum block header"]
#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod chain_context;
pub mod error;
pub mod verify;
pub mod witness;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use chain_context::{BlockHashHistory, RecentBlockHashes, BLOCK_HASH_HISTORY_LENGTH};
pub use error::{BlockHashHistoryError, RandaoVerifierError};
pub use verify::{verify_historical, verify_recent, TrustPath, VerifiedRandao};
pub use witness::{AttestedBlockHashes, BlockHashWitness, WitnessValidator};
