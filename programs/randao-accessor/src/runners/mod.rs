//! Contains the runners of the subcommands.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use ethereum_header::RawHeaderFields;
use serde::{de::DeserializeOwned, Deserialize};

pub mod encode;
pub mod verify_historical;
pub mod verify_recent;

/// A block file, either the bare block object or the JSON-RPC response wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum BlockFile {
    Response { result: RawHeaderFields },
    Block(RawHeaderFields),
}

/// Reads the header fields of a block file.
/// # Errors
/// Returns an error if the file cannot be read or does not hold a block.
pub fn read_block(path: &Path) -> Result<RawHeaderFields> {
    match read_json(path)? {
        BlockFile::Response { result } | BlockFile::Block(result) => Ok(result),
    }
}

/// Reads and deserializes a JSON file.
/// # Errors
/// Returns an error if the file cannot be read or does not deserialize into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bz = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bz).with_context(|| format!("failed to parse {}", path.display()))
}
