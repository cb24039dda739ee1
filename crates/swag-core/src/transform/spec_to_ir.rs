use crate::config::Ordering;
use crate::ir::*;
use crate::parse::document::SwaggerDocument;
use crate::parse::operation::Operation;

use super::name_normalizer::{
    reference_to_class_name, snake_case_to_title_case, strip_newlines, uppercase,
};
use super::schema_resolver::definition_to_model;

/// Options controlling how the document is normalized.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub ordering: Ordering,
}

/// Transform a parsed Swagger document into the IR, keeping document order.
pub fn transform(document: &SwaggerDocument) -> IrSpec {
    transform_with_options(document, &TransformOptions::default())
}

/// Transform with explicit options.
pub fn transform_with_options(document: &SwaggerDocument, options: &TransformOptions) -> IrSpec {
    // Phase 1: Classify definitions
    let mut models: Vec<IrModel> = document
        .definitions
        .iter()
        .map(|(name, def)| definition_to_model(name, def))
        .collect();

    // Phase 2: Collect operations
    let mut operations: Vec<IrOperation> = document
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.iter()
                .map(move |(method, op)| build_operation(path, method, op))
        })
        .collect();

    // Phase 3: Apply ordering
    if options.ordering == Ordering::Alphabetical {
        models.sort_by(|a, b| a.name.cmp(&b.name));
        for model in &mut models {
            model
                .fields
                .sort_by(|a, b| a.original_name.cmp(&b.original_name));
        }
        operations.sort_by(|a, b| (&a.path, &a.method).cmp(&(&b.path, &b.method)));
    }

    log::debug!(
        "normalized {} models and {} operations",
        models.len(),
        operations.len()
    );

    IrSpec { models, operations }
}

fn build_operation(path: &str, method: &str, op: &Operation) -> IrOperation {
    let parameters = op
        .parameters
        .iter()
        .map(|p| IrParameter {
            name: p.name.clone(),
            location: p.location.clone(),
            required: p.required,
        })
        .collect();

    let response = op
        .responses
        .get("200")
        .and_then(|r| r.schema.as_ref())
        .and_then(|s| s.ref_path.as_deref())
        .map(reference_to_class_name);

    IrOperation {
        path: path.to_string(),
        method: uppercase(method),
        operation_id: op.operation_id.clone(),
        method_name: snake_case_to_title_case(&op.operation_id),
        summary: strip_newlines(&op.summary),
        parameters,
        response,
    }
}
