use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::parameter::Parameter;
use super::response::Response;

/// An API operation under `paths.<path>.<method>`.
///
/// Decoded so the whole document shape is accepted; no emitter renders it yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(
        rename = "operationId",
        alias = "operationID",
        deserialize_with = "null_as_default"
    )]
    pub operation_id: String,

    /// Keyed by HTTP status code (`"200"`, `"default"`, ...).
    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "null_as_default")]
    pub responses: IndexMap<String, Response>,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
}
