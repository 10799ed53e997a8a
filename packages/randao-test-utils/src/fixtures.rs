//! JSON-RPC block fixtures captured as `eth_getBlockByNumber` responses.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

/// Path of the fixture file called `name`
#[must_use]
pub fn path(name: &str) -> PathBuf {
    // Construct the path relative to the Cargo manifest directory
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("src/fixtures");
    path.push(format!("{name}.json"));
    path
}

/// Loads and deserializes the fixture called `name`
///
/// # Panics
/// Panics if the fixture does not exist or does not deserialize into `T`.
#[must_use]
pub fn load<T>(name: &str) -> T
where
    T: DeserializeOwned,
{
    let file = std::fs::File::open(path(name)).unwrap();
    serde_json::from_reader(file).unwrap()
}
