//! JSON codec helpers.
//!
//! Thin wrappers around `serde_json` for rendering outbound payloads.
//! The accessibility client consumes JSON text, so every payload crosses
//! the process boundary as UTF-8 JSON bytes. The transport itself lives
//! outside this workspace.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Encode a value to JSON bytes.
///
/// # Errors
///
/// Returns [`SnapshotError::Codec`] if serialisation fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, SnapshotError> {
    serde_json::to_vec(value).map_err(SnapshotError::Codec)
}

/// Encode a value to pretty-printed JSON text, for logs and diagnostics.
///
/// # Errors
///
/// Returns [`SnapshotError::Codec`] if serialisation fails.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(value).map_err(SnapshotError::Codec)
}

/// Decode a value from JSON bytes.
///
/// # Errors
///
/// Returns [`SnapshotError::Codec`] if deserialisation fails.
pub fn decode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, SnapshotError> {
    serde_json::from_slice(bytes).map_err(SnapshotError::Codec)
}
