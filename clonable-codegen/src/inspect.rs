//! Declaration inspector for `#[derive(Clonable)]` input.
//!
//! Reads the record-level `#[clonable(...)]` attribute and the per-field
//! `#[clone(...)]` attributes and turns a struct into a [`RecordSpec`].
//!
//! Record-level keys:
//! - `auto_generate = true|false` - anything that is not a bool literal keeps the default (true)
//! - `default = deep|shallow` - strategy for fields without their own directive
//! - `crate = "path"` - runtime crate path
//!
//! Field-level forms:
//! - `#[clone(strategy = deep)]`, `#[clone(strategy = "shallow")]`
//! - `#[clone(deep)]`, `#[clone(shallow)]`
//! - `#[clone]` - no strategy given, resolves to deep

use proc_macro2::TokenTree;
use syn::meta::ParseNestedMeta;
use syn::{token, Attribute, Data, DeriveInput, Expr, Fields, Lit, Member, Meta, Token};

use crate::error::{CodegenError, CodegenResult};
use crate::model::{default_runtime, resolve_strategy, DeclarationKind, FieldSpec, RecordSpec};
use crate::strategy::CloneStrategy;

const RECORD_ATTR: &str = "clonable";
const FIELD_ATTR: &str = "clone";

/// Options read from `#[clonable(...)]`.
#[derive(Debug, Clone)]
struct RecordOptions {
    auto_generate: bool,
    default_strategy: Option<CloneStrategy>,
    runtime: syn::Path,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self { auto_generate: true, default_strategy: None, runtime: default_runtime() }
    }
}

/// Inspect a derive input. Fields without any directive fall back to
/// [`CloneStrategy::Shallow`] unless the record sets `default`.
pub fn inspect_derive(input: &DeriveInput) -> CodegenResult<RecordSpec> {
    let record = input.ident.to_string();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(CodegenError::UnsupportedDeclaration {
                record,
                kind: DeclarationKind::Enum,
            })
        }
        Data::Union(_) => {
            return Err(CodegenError::UnsupportedDeclaration {
                record,
                kind: DeclarationKind::Union,
            })
        }
    };

    let options = parse_record_options(&input.attrs);

    let fields = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| Some((Member::from(field.ident.clone()?), field)))
            .collect::<Vec<_>>(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| (Member::from(index), field))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let fields = fields
        .into_iter()
        .map(|(member, field)| {
            let strategy = resolve_strategy(
                field_directive(&field.attrs),
                options.default_strategy,
                CloneStrategy::Shallow,
            );
            let name = match &member {
                Member::Named(ident) => ident.to_string(),
                Member::Unnamed(index) => index.index.to_string(),
            };
            FieldSpec::new(name, Some(field.ty.clone()), strategy).with_member(member)
        })
        .collect();

    Ok(RecordSpec {
        name: record,
        ident: Some(input.ident.clone()),
        generics: input.generics.clone(),
        fields,
        auto_generate: options.auto_generate,
        runtime: options.runtime,
    })
}

/// The value of a `key = value` entry. A nested `key(...)` list is skipped.
fn meta_value(meta: &ParseNestedMeta) -> syn::Result<Option<Expr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    if meta.input.peek(token::Paren) {
        meta.input.parse::<TokenTree>()?;
    }
    Ok(None)
}

fn parse_record_options(attrs: &[Attribute]) -> RecordOptions {
    let mut options = RecordOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(RECORD_ATTR)) {
        // Malformed arguments keep whatever was read before them.
        let _ = attr.parse_nested_meta(|meta| {
            let Some(value) = meta_value(&meta)? else {
                return Ok(());
            };
            if meta.path.is_ident("auto_generate") {
                if let Some(value) = bool_literal(&value) {
                    options.auto_generate = value;
                }
            } else if meta.path.is_ident("default") {
                if let Some(strategy) = strategy_name(&value) {
                    options.default_strategy = Some(strategy);
                }
            } else if meta.path.is_ident("crate") {
                if let Some(path) = crate_path(&value) {
                    options.runtime = path;
                }
            }
            Ok(())
        });
    }

    options
}

/// The strategy a field's own `#[clone]` directive asks for. A directive
/// without a recognized strategy means deep; no directive at all means `None`.
fn field_directive(attrs: &[Attribute]) -> Option<CloneStrategy> {
    let attr = attrs.iter().find(|attr| attr.path().is_ident(FIELD_ATTR))?;

    let mut explicit = None;
    match &attr.meta {
        Meta::Path(_) => {}
        Meta::NameValue(nv) => explicit = strategy_name(&nv.value),
        Meta::List(_) => {
            let _ = attr.parse_nested_meta(|meta| {
                let value = meta_value(&meta)?;
                if explicit.is_none() {
                    explicit = match value {
                        Some(expr) if meta.path.is_ident("strategy") => strategy_name(&expr),
                        Some(_) => None,
                        None => meta
                            .path
                            .get_ident()
                            .and_then(|id| CloneStrategy::from_attr_name(&id.to_string())),
                    };
                }
                Ok(())
            });
        }
    }

    Some(explicit.unwrap_or(CloneStrategy::Deep))
}

fn bool_literal(expr: &Expr) -> Option<bool> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Bool(b) => Some(b.value),
            _ => None,
        },
        _ => None,
    }
}

/// `deep`, `"deep"`, `Deep`, `CloneStrategy::Deep` and the shallow equivalents.
fn strategy_name(expr: &Expr) -> Option<CloneStrategy> {
    match expr {
        Expr::Path(path) => {
            let last = path.path.segments.last()?;
            CloneStrategy::from_attr_name(&last.ident.to_string())
        }
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => CloneStrategy::from_attr_name(&s.value()),
            _ => None,
        },
        _ => None,
    }
}

fn crate_path(expr: &Expr) -> Option<syn::Path> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => s.parse().ok(),
            _ => None,
        },
        Expr::Path(path) => Some(path.path.clone()),
        _ => None,
    }
}
