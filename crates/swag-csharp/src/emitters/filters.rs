use minijinja::Environment;
use swag_core::transform::name_normalizer::{
    reference_to_class_name, snake_case_to_title_case, strip_newlines, title, uppercase,
};

/// Register the name transformers as template filters.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("clean_ref", |value: String| reference_to_class_name(&value));
    env.add_filter("snake_case_to_title_case", |value: String| {
        snake_case_to_title_case(&value)
    });
    env.add_filter("strip_newlines", |value: String| strip_newlines(&value));
    env.add_filter("title", |value: String| title(&value));
    env.add_filter("uppercase", |value: String| uppercase(&value));
}
