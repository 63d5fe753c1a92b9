//! Schema document patching.

use serde_json::Value;

/// Rewrite a fetched schema document so the validation engine accepts it.
///
/// Sets `$id` to the fetch location suffixed with `#`, unconditionally
/// overwriting any existing value, so every document in the engine's schema
/// set has a unique, resolvable identifier. Strips the legacy draft-04 `id`
/// member, which may not coexist with `$id`.
///
/// Non-object values are returned untouched; the engine rejects those on its
/// own terms.
pub fn patch_schema(mut schema: Value, schema_uri: &str) -> Value {
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), Value::String(format!("{schema_uri}#")));
        obj.remove("id");
    }
    schema
}
