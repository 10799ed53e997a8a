//! Contains the command line interface for the application.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// The command line interface for the RANDAO accessor.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct RandaoAccessorCli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The subcommands of the RANDAO accessor.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the canonical header RLP and block hash of a JSON-RPC block.
    Encode(BlockArgs),
    /// Verify the RANDAO value of a block within the last 256 blocks.
    VerifyRecent(VerifyRecentArgs),
    /// Verify the RANDAO value of a block attested by an accumulator witness.
    VerifyHistorical(VerifyHistoricalArgs),
}

/// The block to read.
#[derive(Clone, Debug, Args)]
pub struct BlockArgs {
    /// Path to a JSON-RPC block (or `eth_getBlockBy*` response).
    #[arg(long)]
    pub block: PathBuf,
}

/// The arguments of `verify-recent`.
#[derive(Clone, Debug, Args)]
pub struct VerifyRecentArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub block: BlockArgs,

    /// Path to the JSON chain context (current height and recent block hashes).
    #[arg(long)]
    pub context: PathBuf,
}

/// The arguments of `verify-historical`.
#[derive(Clone, Debug, Args)]
pub struct VerifyHistoricalArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub block: BlockArgs,

    /// Path to the JSON accumulator witness.
    #[arg(long)]
    pub witness: PathBuf,
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Commands, RandaoAccessorCli};

    #[test]
    fn test_cli_definition() {
        RandaoAccessorCli::command().debug_assert();
    }

    #[test]
    fn test_parse_verify_recent() {
        let cli = RandaoAccessorCli::try_parse_from([
            "randao-accessor",
            "verify-recent",
            "--block",
            "block.json",
            "--context",
            "context.json",
            "--config",
            "config.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("config.toml")));
        let Commands::VerifyRecent(args) = cli.command else {
            panic!("expected verify-recent");
        };
        assert_eq!(args.block.block, PathBuf::from("block.json"));
        assert_eq!(args.context, PathBuf::from("context.json"));
    }

    #[test]
    fn test_parse_verify_historical_requires_witness() {
        let res = RandaoAccessorCli::try_parse_from([
            "randao-accessor",
            "verify-historical",
            "--block",
            "block.json",
        ]);

        assert!(res.is_err());
    }
}
