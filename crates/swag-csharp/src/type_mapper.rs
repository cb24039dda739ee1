use swag_core::ir::{ElementKind, FieldKind};

/// Map a `FieldKind` to its C# type string representation.
pub fn field_kind_to_csharp(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Integer => "int".to_string(),
        FieldKind::Boolean => "bool".to_string(),
        FieldKind::String => "string".to_string(),
        FieldKind::ArrayOf(element) => format!("List<{}>", element_kind_to_csharp(element)),
        FieldKind::ObjectRef(class) => interface_name(class),
    }
}

/// Map an array `ElementKind` to its C# type string representation.
pub fn element_kind_to_csharp(kind: &ElementKind) -> String {
    match kind {
        ElementKind::Integer => "int".to_string(),
        ElementKind::Boolean => "bool".to_string(),
        ElementKind::String => "string".to_string(),
        ElementKind::ObjectRef(class) => interface_name(class),
    }
}

/// Object references are typed by the capability interface, not the class.
pub fn interface_name(class: &str) -> String {
    format!("I{class}")
}
