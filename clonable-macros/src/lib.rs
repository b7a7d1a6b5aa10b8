//! Procedural macros for Clonable
//!
//! This crate is a thin shell over `clonable-codegen`: it parses the derive
//! input, runs the inspector and synthesizer, and turns failures into
//! `compile_error!` at the type name. Depend on `clonable-core`, which
//! re-exports the derive next to the trait.

use proc_macro::TokenStream;

mod clonable;

/// Derive macro for the `Clonable` trait
///
/// Generates `impl Clonable` whose `clone()` rebuilds the struct field by
/// field, in declaration order:
/// - shallow fields are copied with `Clone::clone` (shared `Rc`/`Arc` stay shared)
/// - deep fields go through their own `Clonable::clone`
/// - deep `Option<T>` fields clone the value when present and stay `None` otherwise
///
/// Fields without a `#[clone]` directive are shallow unless the struct sets
/// `#[clonable(default = deep)]`. A bare `#[clone]` means deep.
///
/// # Example
///
/// ```rust,ignore
/// use clonable_core::Clonable;
///
/// #[derive(Clonable)]
/// #[clonable(default = deep)]
/// struct Document {
///     title: String,
///     sections: Vec<Section>,
///     #[clone(strategy = shallow)]
///     style: std::sync::Arc<Style>,
///     summary: Option<Section>,
/// }
/// ```
///
/// Enums and unions are rejected at compile time.
#[proc_macro_derive(Clonable, attributes(clonable, clone))]
pub fn derive_clonable(input: TokenStream) -> TokenStream {
    clonable::derive_clonable(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
