//! Declarative record schemas.
//!
//! A schema lists records and their fields in TOML, with an explicit strategy
//! entry per field instead of attributes in source:
//!
//! ```toml
//! [[record]]
//! name = "Person"
//! default_strategy = "deep"
//!
//! [[record.field]]
//! name = "name"
//! type = "String"
//!
//! [[record.field]]
//! name = "team"
//! type = "std::rc::Rc<Team>"
//! strategy = "shallow"
//!
//! [[record.field]]
//! name = "display_name"
//! computed = true
//! ```
//!
//! A field's strategy resolves as: its own `strategy`, then the record's
//! `default_strategy`, then [`GeneratorDefaults::default_strategy`].

use std::collections::HashSet;

use serde::Deserialize;
use syn::{Generics, Type};

use crate::error::{CodegenError, CodegenResult};
use crate::model::{default_runtime, resolve_strategy, DeclarationKind, FieldSpec, RecordSpec};
use crate::strategy::CloneStrategy;

/// A parsed schema document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    #[serde(default, rename = "record")]
    pub records: Vec<RecordSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSchema {
    pub name: String,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default = "default_auto_generate")]
    pub auto_generate: bool,
    #[serde(default)]
    pub default_strategy: Option<CloneStrategy>,
    /// Generic parameter list, e.g. `"<T: Clone>"`.
    #[serde(default)]
    pub generics: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub strategy: Option<CloneStrategy>,
    /// Derived from other fields; never cloned.
    #[serde(default)]
    pub computed: bool,
}

fn default_auto_generate() -> bool {
    true
}

impl Schema {
    pub fn from_toml(text: &str) -> CodegenResult<Self> {
        toml::from_str(text).map_err(|e| CodegenError::SchemaParse(e.to_string()))
    }
}

/// Generator-wide settings that schema records inherit.
#[derive(Debug, Clone)]
pub struct GeneratorDefaults {
    pub runtime: syn::Path,
    pub default_strategy: CloneStrategy,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self { runtime: default_runtime(), default_strategy: CloneStrategy::Shallow }
    }
}

/// Inspect one schema record. Computed fields are dropped; the remaining
/// fields keep their order.
pub fn inspect_schema(record: &RecordSchema, defaults: &GeneratorDefaults) -> CodegenResult<RecordSpec> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(CodegenError::invalid_schema("<unnamed>", "record name is empty"));
    }

    if record.kind != DeclarationKind::Struct {
        return Err(CodegenError::UnsupportedDeclaration {
            record: name.to_string(),
            kind: record.kind,
        });
    }

    let generics = match &record.generics {
        Some(text) => syn::parse_str::<Generics>(text).map_err(|e| {
            CodegenError::invalid_schema(name, format!("generics `{text}`: {e}"))
        })?,
        None => Generics::default(),
    };

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(record.fields.len());

    for field in &record.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(CodegenError::invalid_schema(
                name,
                format!("field `{}` is declared twice", field.name),
            ));
        }
        if field.computed {
            continue;
        }

        let ty = match &field.ty {
            Some(text) => Some(syn::parse_str::<Type>(text).map_err(|e| {
                CodegenError::invalid_schema(
                    name,
                    format!("field `{}` has type `{text}`: {e}", field.name),
                )
            })?),
            None => None,
        };

        let strategy =
            resolve_strategy(field.strategy, record.default_strategy, defaults.default_strategy);
        fields.push(FieldSpec::new(field.name.clone(), ty, strategy));
    }

    Ok(RecordSpec {
        name: name.to_string(),
        ident: None,
        generics,
        fields,
        auto_generate: record.auto_generate,
        runtime: defaults.runtime.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON: &str = r#"
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

        [[record.field]]
        name = "label"
        type = "String"
        strategy = "deep"
        computed = true

        [[record.field]]
        name = "nickname"
        type = "Option<String>"
    "#;

    #[test]
    fn parses_and_inspects_a_record() {
        let schema = Schema::from_toml(PERSON).unwrap();
        assert_eq!(schema.records.len(), 1);

        let spec = inspect_schema(&schema.records[0], &GeneratorDefaults::default()).unwrap();
        assert_eq!(spec.name, "Person");
        assert!(spec.auto_generate);

        let fields: Vec<_> = spec.fields.iter().map(|f| (f.name.as_str(), f.strategy)).collect();
        assert_eq!(
            fields,
            [
                ("name", CloneStrategy::Deep),
                ("age", CloneStrategy::Shallow),
                ("nickname", CloneStrategy::Deep),
            ]
        );
        assert!(spec.fields[2].is_optional());
    }

    #[test]
    fn generator_default_applies_last() {
        let schema = Schema::from_toml(
            r#"
            [[record]]
            name = "Point"
            [[record.field]]
            name = "x"
            [[record.field]]
            name = "y"
            strategy = "shallow"
            "#,
        )
        .unwrap();
        let defaults =
            GeneratorDefaults { default_strategy: CloneStrategy::Deep, ..Default::default() };
        let spec = inspect_schema(&schema.records[0], &defaults).unwrap();
        assert_eq!(spec.fields[0].strategy, CloneStrategy::Deep);
        assert_eq!(spec.fields[1].strategy, CloneStrategy::Shallow);
        assert!(spec.fields[0].ty.is_none());
    }

    #[test]
    fn enum_records_are_unsupported() {
        let schema = Schema::from_toml(
            r#"
            [[record]]
            name = "Color"
            kind = "enum"
            "#,
        )
        .unwrap();
        let err = inspect_schema(&schema.records[0], &GeneratorDefaults::default()).unwrap_err();
        assert_eq!(err.kind(), "UnsupportedDeclaration");
        assert_eq!(err.record(), Some("Color"));
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        let err = Schema::from_toml(
            r#"
            [[record]]
            name = "A"
            [[record.field]]
            name = "x"
            strategy = "custom"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "SchemaParse");
    }

    #[test]
    fn bad_types_and_duplicates_are_invalid() {
        let schema = Schema::from_toml(
            r#"
            [[record]]
            name = "A"
            [[record.field]]
            name = "x"
            type = "Vec<"

            [[record]]
            name = "B"
            [[record.field]]
            name = "x"
            [[record.field]]
            name = "x"

            [[record]]
            name = "C"
            generics = "T"
            "#,
        )
        .unwrap();
        let defaults = GeneratorDefaults::default();
        for record in &schema.records {
            let err = inspect_schema(record, &defaults).unwrap_err();
            assert_eq!(err.kind(), "InvalidSchema", "record {}", record.name);
        }
    }

    #[test]
    fn raw_field_names_generate() {
        let schema = Schema::from_toml(
            r#"
            [[record]]
            name = "Token"
            [[record.field]]
            name = "r#type"
            type = "String"
            [[record.field]]
            name = "名前"
            "#,
        )
        .unwrap();
        let spec = inspect_schema(&schema.records[0], &GeneratorDefaults::default()).unwrap();
        assert!(crate::synthesize(&spec).is_ok());
    }

    #[test]
    fn generics_are_parsed() {
        let schema = Schema::from_toml(
            r#"
            [[record]]
            name = "Wrapper"
            generics = "<T: Clone>"
            [[record.field]]
            name = "inner"
            type = "T"
            "#,
        )
        .unwrap();
        let spec = inspect_schema(&schema.records[0], &GeneratorDefaults::default()).unwrap();
        assert_eq!(spec.generics.params.len(), 1);
    }
}
