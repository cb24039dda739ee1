use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::definition::Definition;
use super::operation::Operation;

/// Operations of a single path, keyed by HTTP method (`get`, `post`, ...).
pub type PathItem = IndexMap<String, Operation>;

/// The subset of a Swagger 2.0 document the generator decodes.
///
/// Both mappings keep the key order of the input document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaggerDocument {
    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "null_as_default")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "null_as_default")]
    pub definitions: IndexMap<String, Definition>,
}
