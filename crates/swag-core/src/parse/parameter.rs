use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::response::SchemaRef;

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// `path`, `query`, `header`, or `body`.
    #[serde(rename = "in", deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,

    /// Used with primitives.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    /// Used with type `array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ParameterItems>,

    /// Used with an HTTP body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterItems {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}
