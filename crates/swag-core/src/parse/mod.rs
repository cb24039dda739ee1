pub mod definition;
pub mod document;
pub mod operation;
pub mod parameter;
pub mod response;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::LoadError;
use document::SwaggerDocument;

/// Decode an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse a Swagger document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerDocument, LoadError> {
    let document: SwaggerDocument = serde_json::from_str(input)?;
    log::debug!(
        "decoded {} definitions and {} paths",
        document.definitions.len(),
        document.paths.len()
    );
    Ok(document)
}

/// Read a file and parse it as a Swagger JSON document.
pub fn load_file(path: &Path) -> Result<SwaggerDocument, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&content)
}
