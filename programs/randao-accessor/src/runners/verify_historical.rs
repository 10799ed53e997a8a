//! Contains the runner for the `verify-historical` command.

use anyhow::Result;
use randao_verifier::{verify_historical, BlockHashWitness, VerifiedRandao};

use crate::{cli::VerifyHistoricalArgs, config::RandaoAccessorConfig};

/// Verifies the RANDAO value of a block against an accumulator witness. The witness is accepted
/// if its block hash is one of the attested hashes of `config`.
/// # Errors
/// Returns an error if an input file cannot be read or the verification fails.
pub fn run(config: &RandaoAccessorConfig, args: &VerifyHistoricalArgs) -> Result<VerifiedRandao> {
    let raw = super::read_block(&args.block.block)?;
    let witness: BlockHashWitness = super::read_json(&args.witness)?;
    let canonical = raw.canonicalize()?;

    let validator = config.witness_validator();
    Ok(verify_historical(
        &validator,
        canonical.as_bytes(),
        &witness,
    )?)
}
