//! Options schema loading.
//!
//! A default schema is compiled into the binary. A JSON file can replace it
//! (see `schema_path` in `config.toml` or `--schema` on the CLI).

use std::path::Path;

use hbs_types::error::SchemaError;
use hbs_types::schema::OptionsSchema;

const BUNDLED_SCHEMA: &str = include_str!("../schema/default.json");

/// The schema shipped with the binary.
pub fn bundled_schema() -> Result<OptionsSchema, SchemaError> {
    serde_json::from_str(BUNDLED_SCHEMA).map_err(|e| SchemaError::Parse(e.to_string()))
}

/// Load a schema from a JSON file.
pub async fn load_schema_file(path: &Path) -> Result<OptionsSchema, SchemaError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SchemaError::Io(format!("{}: {e}", path.display())))?;

    serde_json::from_str(&content)
        .map_err(|e| SchemaError::Parse(format!("{}: {e}", path.display())))
}

/// Load the override at `path` when given, otherwise the bundled schema.
pub async fn load_schema(path: Option<&Path>) -> Result<OptionsSchema, SchemaError> {
    match path {
        Some(path) => {
            tracing::debug!("Loading options schema from {}", path.display());
            load_schema_file(path).await
        }
        None => bundled_schema(),
    }
}
