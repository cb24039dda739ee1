use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One named data model under `definitions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Keyed by the original property name, usually snake_case.
    #[serde(skip_serializing_if = "IndexMap::is_empty", deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, Property>,
}

/// A single field of a definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    /// Used when the property is an object.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// Used with type `array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Element description of an array property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Items {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
}
