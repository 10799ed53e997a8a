//! Configuration of the RANDAO accessor, read from a TOML file.

use std::{fs, path::Path, str::FromStr};

use alloy_primitives::B256;
use anyhow::{Context, Result};
use randao_verifier::AttestedBlockHashes;
use serde::{Deserialize, Serialize};
use tracing::Level;

/// The configuration of the RANDAO accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandaoAccessorConfig {
    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Block hashes the accumulator service has attested to.
    #[serde(default)]
    pub attested_block_hashes: Vec<AttestedBlockHash>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// The log level (`trace`, `debug`, `info`, `warn` or `error`).
    #[serde(default = "default_level")]
    pub level: String,
}

/// A `(block_number, block_hash)` pair accepted by the accumulator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestedBlockHash {
    /// The attested block number.
    pub block_number: u64,
    /// The attested block hash.
    pub block_hash: B256,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ObservabilityConfig {
    /// The configured level, `INFO` if it does not parse.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_str(&self.level).unwrap_or(Level::INFO)
    }
}

impl RandaoAccessorConfig {
    /// Loads the configuration from `path`, or the defaults if no path is given.
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// The attested block hashes as a witness validator.
    #[must_use]
    pub fn witness_validator(&self) -> AttestedBlockHashes {
        self.attested_block_hashes
            .iter()
            .map(|attested| (attested.block_number, attested.block_hash))
            .collect()
    }
}
