use minijinja::{Environment, context};
use swag_core::ir::{IrModel, IrSpec};

use crate::error::RenderError;
use crate::type_mapper::field_kind_to_csharp;

use super::filters;

/// Emit the C# compilation unit: one interface and one class per model.
pub fn emit_models(
    ir: &IrSpec,
    namespace: &str,
    json_attribute: &str,
) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    filters::register(&mut env);
    env.add_template("models.cs.j2", include_str!("../../templates/models.cs.j2"))?;
    let tmpl = env.get_template("models.cs.j2")?;

    let models: Vec<_> = ir.models.iter().map(model_to_ctx).collect();
    log::debug!("rendering {} models into namespace {namespace}", models.len());

    let rendered = tmpl.render(context! {
        namespace => namespace,
        json_attribute => json_attribute,
        models => models,
    })?;
    Ok(rendered)
}

fn model_to_ctx(model: &IrModel) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = model
        .fields
        .iter()
        .map(|f| {
            context! {
                name => f.field_name.clone(),
                original_name => f.original_name.clone(),
                type => field_kind_to_csharp(&f.kind),
                description => f.description.clone(),
            }
        })
        .collect();

    context! {
        class_name => model.class_name.clone(),
        description => model.description.clone(),
        fields => fields,
    }
}
