use serde::Serialize;

use super::operations::IrOperation;
use super::schemas::IrModel;

/// A normalized, generator-ready representation of a Swagger document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IrSpec {
    pub models: Vec<IrModel>,
    /// Decoded API operations. No emitter consumes these yet; a client emitter
    /// would attach here.
    pub operations: Vec<IrOperation>,
}
