use serde::Serialize;

/// A decoded API operation.
#[derive(Debug, Clone, Serialize)]
pub struct IrOperation {
    pub path: String,
    /// Uppercase HTTP method.
    pub method: String,
    pub operation_id: String,
    /// `operation_id` converted to TitleCase.
    pub method_name: String,
    pub summary: String,
    pub parameters: Vec<IrParameter>,
    /// Class name of the successful response body, if it references a definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// An operation parameter.
#[derive(Debug, Clone, Serialize)]
pub struct IrParameter {
    pub name: String,
    pub location: String,
    pub required: bool,
}
