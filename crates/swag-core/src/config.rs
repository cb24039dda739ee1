use std::fs;
use std::path::Path;

use heck::ToPascalCase;
use serde::Deserialize;

use crate::error::ConfigError;

/// Generator configuration loaded from `.swag-gen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwagConfig {
    pub namespace: String,
    pub json_attribute: String,
    pub ordering: Ordering,
}

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "Api";

impl Default for SwagConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            json_attribute: "TinyJson.JsonProperty".to_string(),
            ordering: Ordering::Document,
        }
    }
}

impl SwagConfig {
    /// The namespace with every dotted segment PascalCased.
    ///
    /// - `"api"` → `"Api"`
    /// - `"my_game.client"` → `"MyGame.Client"`
    /// - `""` or `"."` → `"Api"`
    pub fn normalized_namespace(&self) -> String {
        let segments: Vec<String> = self
            .namespace
            .split('.')
            .map(|s| s.to_pascal_case())
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            return DEFAULT_NAMESPACE.to_string();
        }
        segments.join(".")
    }
}

/// How definitions, properties, and paths are ordered in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// Keep the key order of the input document.
    #[default]
    Document,
    /// Sort every mapping by key.
    Alphabetical,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swag-gen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwagConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SwagConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}
