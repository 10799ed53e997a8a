//! Contains the runner for the `verify-recent` command.

use anyhow::Result;
use randao_verifier::{verify_recent, RecentBlockHashes, VerifiedRandao};

use crate::cli::VerifyRecentArgs;

/// Verifies the RANDAO value of a block against a recent block hash context.
/// # Errors
/// Returns an error if an input file cannot be read or the verification fails.
pub fn run(args: &VerifyRecentArgs) -> Result<VerifiedRandao> {
    let raw = super::read_block(&args.block.block)?;
    let context: RecentBlockHashes = super::read_json(&args.context)?;
    let canonical = raw.canonicalize()?;

    Ok(verify_recent(&context, canonical.as_bytes())?)
}
