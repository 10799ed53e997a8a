use anyhow::Result;
use clap::Parser;
use randao_accessor::{
    cli::{Commands, RandaoAccessorCli},
    config::RandaoAccessorConfig,
    observability::init_observability,
    runners,
};
use serde::Serialize;

fn print_json<T: Serialize>(output: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = RandaoAccessorCli::parse();
    let config = RandaoAccessorConfig::load(cli.config.as_deref())?;

    init_observability(&config.observability)?;
    tracing::debug!(
        "Observability initialized with level: {}",
        config.observability.level()
    );

    match cli.command {
        Commands::Encode(args) => print_json(&runners::encode::run(&args)?),
        Commands::VerifyRecent(args) => print_json(&runners::verify_recent::run(&args)?),
        Commands::VerifyHistorical(args) => {
            print_json(&runners::verify_historical::run(&config, &args)?)
        }
    }
}
