//! Hex string helpers for JSON-RPC style `0x` quantities and data.

use alloy_primitives::hex;

/// Formats `data` as a `0x` prefixed lowercase hex string.
///
/// Empty data is rendered as `0x`, which is how JSON-RPC renders an empty byte string.
#[must_use]
pub fn to_hex<T: AsRef<[u8]>>(data: T) -> String {
    format!("0x{}", hex::encode(data.as_ref()))
}

/// Returns the digits following a `0x` or `0X` prefix, or `None` if the prefix is missing.
#[must_use]
pub fn strip_hex_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}
