use swag_core::CodeGenerator;
use swag_core::config::SwagConfig;
use swag_core::ir::IrSpec;

use crate::emitters;
use crate::error::RenderError;

/// C# data-model generator.
#[derive(Debug, Clone)]
pub struct CSharpGenerator {
    pub namespace: String,
    pub json_attribute: String,
}

impl CSharpGenerator {
    pub fn from_config(config: &SwagConfig) -> Self {
        Self {
            namespace: config.normalized_namespace(),
            json_attribute: config.json_attribute.clone(),
        }
    }
}

impl Default for CSharpGenerator {
    fn default() -> Self {
        Self::from_config(&SwagConfig::default())
    }
}

impl CodeGenerator for CSharpGenerator {
    type Error = RenderError;

    fn generate(&self, ir: &IrSpec) -> Result<String, RenderError> {
        emitters::models::emit_models(ir, &self.namespace, &self.json_attribute)
    }
}
