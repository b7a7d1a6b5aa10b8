//! Record and field specifications handed from the inspector to the synthesizer.

use std::fmt;

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::{GenericArgument, Generics, Ident, Index, Member, PathArguments, Type};

use crate::strategy::CloneStrategy;

/// Path of the runtime crate that generated code refers to.
pub const DEFAULT_RUNTIME_CRATE: &str = "::clonable_core";

/// Shape of a declaration. Only `Struct` can be cloned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(serde::Deserialize))]
#[cfg_attr(feature = "schema", serde(rename_all = "snake_case"))]
pub enum DeclarationKind {
    #[default]
    Struct,
    Enum,
    Union,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeclarationKind::Struct => "a struct",
            DeclarationKind::Enum => "an enum",
            DeclarationKind::Union => "a union",
        })
    }
}

/// One stored field of a record.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, or its position (`"0"`, `"1"`, ...) for tuple structs.
    pub name: String,
    /// Declared type. Schema records may leave it out.
    pub ty: Option<Type>,
    pub strategy: CloneStrategy,
    /// The member exactly as written in source, spans included.
    pub declared: Option<Member>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: Option<Type>, strategy: CloneStrategy) -> Self {
        Self { name: name.into(), ty, strategy, declared: None }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.declared = Some(member);
        self
    }

    /// `T` when the declared type is `Option<T>`.
    pub fn optional_inner(&self) -> Option<&Type> {
        self.ty.as_ref().and_then(option_inner)
    }

    pub fn is_optional(&self) -> bool {
        self.optional_inner().is_some()
    }

    /// The member expression used to read and initialize this field, or `None`
    /// when the name cannot be tokenized at all.
    pub(crate) fn member(&self) -> Option<Member> {
        if let Some(member) = &self.declared {
            return Some(member.clone());
        }
        if self.name.bytes().all(|b| b.is_ascii_digit()) {
            let index = self.name.parse::<u32>().ok()?;
            return Some(Member::Unnamed(Index { index, span: Span::call_site() }));
        }
        ident(&self.name).map(Member::Named)
    }
}

/// Everything the synthesizer needs to know about one record.
#[derive(Debug, Clone)]
pub struct RecordSpec {
    pub name: String,
    /// The type name as written in source. Schema records only have `name`.
    pub ident: Option<Ident>,
    pub generics: Generics,
    /// Stored fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// When false the `clone()` body is left to the user.
    pub auto_generate: bool,
    /// Path of the crate exporting the `Clonable` trait.
    pub runtime: syn::Path,
}

impl RecordSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ident: None,
            generics: Generics::default(),
            fields: Vec::new(),
            auto_generate: true,
            runtime: default_runtime(),
        }
    }

    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}

pub fn default_runtime() -> syn::Path {
    syn::parse_quote!(::clonable_core)
}

/// Picks a field's strategy: its own directive, then the record-wide default,
/// then `fallback`.
pub fn resolve_strategy(
    field: Option<CloneStrategy>,
    record: Option<CloneStrategy>,
    fallback: CloneStrategy,
) -> CloneStrategy {
    field.or(record).unwrap_or(fallback)
}

/// Builds an identifier from text. Raw (`r#type`) and Unicode identifiers
/// are accepted, and so are keywords: a reserved name surfaces when the
/// output is re-parsed rather than here.
pub(crate) fn ident(name: &str) -> Option<Ident> {
    if name == "_" {
        return None;
    }
    Ident::parse_any.parse_str(name).ok()
}

fn option_inner(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Group(group) => option_inner(&group.elem),
        Type::Paren(paren) => option_inner(&paren.elem),
        Type::Path(path) if path.qself.is_none() => {
            let segments = &path.path.segments;
            let last = segments.last()?;
            if last.ident != "Option" {
                return None;
            }
            // `Option`, `std::option::Option` or `core::option::Option`
            let prefix_ok = match segments.len() {
                1 => true,
                3 => {
                    let root = &segments[0].ident;
                    (root == "std" || root == "core") && segments[1].ident == "option"
                }
                _ => false,
            };
            if !prefix_ok {
                return None;
            }
            let PathArguments::AngleBracketed(args) = &last.arguments else {
                return None;
            };
            match (args.args.len(), args.args.first()) {
                (1, Some(GenericArgument::Type(inner))) => Some(inner),
                _ => None,
            }
        }
        _ => None,
    }
}
