//! Clonable code generation.
//!
//! The generator is a two-step pipeline of pure functions:
//!
//! 1. **Inspect** a declaration into a [`RecordSpec`]: its stored fields in
//!    order, each with a resolved [`CloneStrategy`]. Two front ends exist:
//!    [`inspect_derive`] for `#[derive(Clonable)]` input and, with the
//!    `schema` feature, [`inspect_schema`] for TOML record schemas.
//! 2. **Synthesize** an [`Expansion`]: the `impl Clonable` items, re-parsed to
//!    make sure they are valid Rust.
//!
//! Nothing here keeps state between calls, so records can be generated in any
//! order or in parallel, and the same input always yields the same output.

pub mod error;
pub mod inspect;
pub mod model;
#[cfg(feature = "schema")]
pub mod schema;
pub mod source;
pub mod strategy;
pub mod synthesize;

pub use error::{CodegenError, CodegenResult};
pub use inspect::inspect_derive;
pub use model::{DeclarationKind, FieldSpec, RecordSpec, DEFAULT_RUNTIME_CRATE};
#[cfg(feature = "schema")]
pub use schema::{inspect_schema, GeneratorDefaults, Schema};
pub use source::derive_targets;
pub use strategy::{CloneStrategy, ParseStrategyError};
pub use synthesize::{synthesize, Expansion};

/// Inspect and synthesize a derive input.
pub fn expand_derive(input: &syn::DeriveInput) -> CodegenResult<Expansion> {
    synthesize(&inspect_derive(input)?)
}

/// Generate every record of a schema. Each record succeeds or fails on its
/// own; results come back in schema order.
#[cfg(feature = "schema")]
pub fn expand_schema(
    schema: &Schema,
    defaults: &GeneratorDefaults,
) -> Vec<(String, CodegenResult<Expansion>)> {
    schema
        .records
        .iter()
        .map(|record| {
            let result = inspect_schema(record, defaults).and_then(|spec| synthesize(&spec));
            (record.name.clone(), result)
        })
        .collect()
}
