//! Standard JSON Schema of the [`Build`] record, for API consumers.

use architect_types::build::Build;
use serde_json::Value;

/// Generate the JSON Schema of `Build` (including the optional `imageUrl`).
pub fn build_json_schema() -> Value {
    let schema = schemars::schema_for!(Build);
    serde_json::to_value(&schema).unwrap_or(Value::Null)
}
