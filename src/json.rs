//! JSON encode/decode shortcuts over `serde_json`

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and decodes a JSON file.
///
/// # Errors
///
/// [`crate::Error::Io`] if the file cannot be read, [`crate::Error::Serialization`]
/// if its contents do not match `T`.
pub fn decode_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    decode(&content)
}
