use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clonable_codegen::{expand_schema, Schema};

use crate::config::CodegenConfig;

const HEADER: &str = "// @generated by clonable from a record schema. Do not edit by hand.\n";

/// Output of one generator run.
#[derive(Debug, Default)]
pub struct Generated {
    pub source: String,
    pub records: Vec<String>,
    /// `(record, message)` for every record that failed.
    pub failures: Vec<(String, String)>,
}

/// Generate source for every record of `schema`. Failing records are
/// reported and skipped; the rest are still emitted.
pub fn render(schema: &Schema, config: &CodegenConfig) -> Result<Generated> {
    let defaults = config.generator_defaults()?;
    let mut generated = Generated::default();
    let mut pieces = Vec::new();

    if config.header {
        pieces.push(HEADER.to_string());
    }

    for (name, result) in expand_schema(schema, &defaults) {
        match result {
            Ok(expansion) => {
                log::debug!("generated Clonable for {}", name);
                pieces.push(expansion.to_source());
                generated.records.push(name);
            }
            Err(e) => {
                log::error!("{} failed ({}): {}", name, e.kind(), e);
                generated.failures.push((name, e.to_string()));
            }
        }
    }

    generated.source = pieces.join("\n");
    Ok(generated)
}

/// Generate `schema_path` into `out`, or to stdout when `out` is `None`.
pub fn run(schema_path: &Path, out: Option<&Path>, config: &CodegenConfig) -> Result<()> {
    let schema = super::read_schema(schema_path)?;
    let generated = render(&schema, config)?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(path, &generated.source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} record(s) to {}", generated.records.len(), path.display());
        }
        None => print!("{}", generated.source),
    }

    if !generated.failures.is_empty() {
        bail!(
            "{} of {} record(s) failed to generate",
            generated.failures.len(),
            schema.records.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
        [[record]]
        name = "Person"
        default_strategy = "deep"

        [[record.field]]
        name = "name"
        type = "String"

        [[record.field]]
        name = "age"
        type = "u32"
        strategy = "shallow"

        [[record]]
        name = "Color"
        kind = "enum"
    "#;

    #[test]
    fn renders_good_records_and_reports_bad_ones() {
        let schema = Schema::from_toml(SCHEMA).unwrap();
        let generated = render(&schema, &CodegenConfig::default()).unwrap();

        assert!(generated.source.starts_with("// @generated"));
        assert!(generated.source.contains("impl ::clonable_core::Clonable for Person"));
        assert_eq!(generated.records, ["Person"]);
        assert_eq!(generated.failures.len(), 1);
        assert_eq!(generated.failures[0].0, "Color");
    }

    #[test]
    fn config_controls_runtime_and_header() {
        let schema = Schema::from_toml(SCHEMA).unwrap();
        let config = CodegenConfig {
            runtime_crate: "my_app::clone_support".into(),
            header: false,
            ..Default::default()
        };
        let generated = render(&schema, &config).unwrap();
        assert!(!generated.source.starts_with("//"));
        assert!(generated.source.contains("impl my_app::clone_support::Clonable for Person"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let schema = Schema::from_toml(SCHEMA).unwrap();
        let config = CodegenConfig::default();
        let first = render(&schema, &config).unwrap().source;
        let second = render(&schema, &config).unwrap().source;
        assert_eq!(first, second);
    }

    #[test]
    fn run_writes_output_and_fails_on_bad_records() {
        let tmp = tempfile::tempdir().unwrap();
        let schema_path = tmp.path().join("records.toml");
        fs::write(&schema_path, SCHEMA).unwrap();
        let out = tmp.path().join("gen/clonable.rs");

        let result = run(&schema_path, Some(&out), &CodegenConfig::default());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("1 of 2"));

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("for Person"));
        assert!(!written.contains("Color"));
    }

    #[test]
    fn sample_schema_generates_cleanly() {
        let schema = Schema::from_toml(include_str!("../../samples/records.toml")).unwrap();
        let generated = render(&schema, &CodegenConfig::default()).unwrap();
        assert!(generated.failures.is_empty());
        assert_eq!(generated.records, ["Person", "Team", "Cache"]);
        assert!(generated.source.contains("team: ::core::clone::Clone::clone(&self.team)"));
        assert!(!generated.source.contains("display_name"));
    }

    #[test]
    fn run_reports_missing_schema() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run(&tmp.path().join("missing.toml"), None, &CodegenConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("failed to read schema"));
    }
}
