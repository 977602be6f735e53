use std::path::{Path, PathBuf};

use homework_diary_core::{ActivityInput, DiarySheet, HomeworkEntry};
use schemars::schema_for;

use crate::infrastructure::error::{CliError, Result};

/// Write JSON schemas for the exchanged data shapes into `out_dir`
pub fn export_schemas(out_dir: &Path) -> Result<Vec<PathBuf>> {
    if !out_dir.is_dir() {
        return Err(CliError::invalid_directory(out_dir.to_path_buf()));
    }

    let schemas = [
        ("activity_input", schema_for!(ActivityInput)),
        ("homework_entry", schema_for!(HomeworkEntry)),
        ("diary_sheet", schema_for!(DiarySheet)),
    ];

    let mut written = Vec::with_capacity(schemas.len());
    for (name, schema) in schemas {
        let json = serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::SchemaGeneration(format!("{name}: {e}")))?;
        let path = out_dir.join(format!("{name}.schema.json"));
        std::fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "schema written");
        written.push(path);
    }

    Ok(written)
}
