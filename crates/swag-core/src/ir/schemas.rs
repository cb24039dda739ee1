use serde::Serialize;

/// A data model derived from one schema definition.
#[derive(Debug, Clone, Serialize)]
pub struct IrModel {
    /// Key of the definition in the input document.
    pub name: String,
    pub class_name: String,
    pub description: String,
    pub fields: Vec<IrField>,
}

/// A field on a model.
#[derive(Debug, Clone, Serialize)]
pub struct IrField {
    /// Property key in the input document; used for (de)serialization.
    pub original_name: String,
    pub field_name: String,
    pub kind: FieldKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// The shape of a field, decided once during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Boolean,
    String,
    ArrayOf(ElementKind),
    /// Reference to another model by class name.
    ObjectRef(String),
}

/// The element shape of an array field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ElementKind {
    Integer,
    Boolean,
    String,
    ObjectRef(String),
}
