//! `architect schema`.

use anyhow::Result;

use architect_core::schema::{build_json_schema, build_shape};

/// Print the published JSON Schema, or the response constraint sent to the
/// text service when `remote` is set.
pub fn print_schema(remote: bool) -> Result<()> {
    let schema = if remote {
        build_shape().to_response_schema()
    } else {
        build_json_schema()
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
