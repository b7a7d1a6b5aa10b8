use anyhow::{bail, Result};
use clonable_codegen::{inspect_schema, synthesize, Schema};
use std::path::Path;

use crate::config::CodegenConfig;

/// One line per record: `ok` with its stored field count, or the failure.
pub fn report(schema: &Schema, config: &CodegenConfig) -> Result<(Vec<String>, usize)> {
    let defaults = config.generator_defaults()?;
    let mut lines = Vec::with_capacity(schema.records.len());
    let mut failed = 0;

    for record in &schema.records {
        let result = inspect_schema(record, &defaults)
            .and_then(|spec| synthesize(&spec).map(|_| spec.fields.len()));
        match result {
            Ok(fields) => lines.push(format!("ok     {} ({} stored field(s))", record.name, fields)),
            Err(e) => {
                failed += 1;
                lines.push(format!("error  {}: {} ({})", record.name, e, e.kind()));
            }
        }
    }

    Ok((lines, failed))
}

pub fn run(schema_path: &Path, config: &CodegenConfig) -> Result<()> {
    let schema = super::read_schema(schema_path)?;
    let (lines, failed) = report(&schema, config)?;

    for line in &lines {
        println!("{}", line);
    }

    if failed > 0 {
        bail!("{} of {} record(s) are invalid", failed, schema.records.len());
    }
    log::info!("{} record(s) OK", schema.records.len());
    Ok(())
}
