use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde_json::Value;

/// Generates the JSON schema of a tool's parameter type.
///
/// Sub-schemas are inlined and `Option<T>` fields are rendered as plain `T`
/// (they are simply left out of `required`), which is the shape function-calling
/// models expect. The `$schema`, `title` and `definitions` keys are dropped.
pub fn generate_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.option_nullable = false;
        s.option_add_null_type = false;
        s.meta_schema = None;
    });
    let schema = settings.into_generator().into_root_schema_for::<T>();

    let mut value = serde_json::to_value(schema).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.remove("title");
        map.remove("definitions");
    }
    value
}
