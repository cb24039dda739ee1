use crate::ir::{ElementKind, FieldKind, IrField, IrModel};
use crate::parse::definition::{Definition, Items, Property};

use super::name_normalizer::{reference_to_class_name, snake_case_to_title_case, title};

/// Convert a parsed `Definition` into an `IrModel`, classifying every property.
pub fn definition_to_model(name: &str, definition: &Definition) -> IrModel {
    let fields = definition
        .properties
        .iter()
        .map(|(prop_name, prop)| property_to_field(name, prop_name, prop))
        .collect();

    IrModel {
        name: name.to_string(),
        class_name: title(name),
        description: definition.description.clone(),
        fields,
    }
}

fn property_to_field(model: &str, name: &str, prop: &Property) -> IrField {
    let kind = classify_property(prop);
    if let FieldKind::ObjectRef(ref class) = kind {
        if let Some(ref other) = prop.property_type {
            log::warn!("{model}.{name}: unsupported type `{other}`, treating as object reference");
        }
        if class.is_empty() {
            log::warn!("{model}.{name}: object reference without a `$ref` target");
        }
    }

    IrField {
        original_name: name.to_string(),
        field_name: snake_case_to_title_case(name),
        kind,
        description: prop.description.clone(),
        format: prop.format.clone(),
    }
}

/// Decide the shape of a property.
///
/// Anything without a recognized `type` is a reference to another definition
/// through `$ref`.
pub fn classify_property(prop: &Property) -> FieldKind {
    match prop.property_type.as_deref() {
        Some("integer") => FieldKind::Integer,
        Some("boolean") => FieldKind::Boolean,
        Some("string") => FieldKind::String,
        Some("array") => FieldKind::ArrayOf(classify_items(prop.items.as_ref())),
        _ => FieldKind::ObjectRef(class_name_of(prop.ref_path.as_deref())),
    }
}

fn classify_items(items: Option<&Items>) -> ElementKind {
    let Some(items) = items else {
        return ElementKind::ObjectRef(String::new());
    };
    match items.item_type.as_deref() {
        Some("string") => ElementKind::String,
        Some("integer") => ElementKind::Integer,
        Some("boolean") => ElementKind::Boolean,
        _ => ElementKind::ObjectRef(class_name_of(items.ref_path.as_deref())),
    }
}

fn class_name_of(ref_path: Option<&str>) -> String {
    ref_path.map(reference_to_class_name).unwrap_or_default()
}
