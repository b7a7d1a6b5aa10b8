pub mod check;
pub mod expand;
pub mod generate;

use anyhow::{Context, Result};
use clonable_codegen::Schema;
use std::fs;
use std::path::Path;

/// Read and parse a schema file.
pub(crate) fn read_schema(path: &Path) -> Result<Schema> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    log::debug!("parsing schema {} ({} bytes)", path.display(), text.len());
    Schema::from_toml(&text).with_context(|| format!("failed to parse schema {}", path.display()))
}
