//! Clone synthesizer: turns a [`RecordSpec`] into `Clonable` impl items.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_quote, Ident, WherePredicate};

use crate::error::{CodegenError, CodegenResult};
use crate::model::{ident, FieldSpec, RecordSpec};
use crate::strategy::CloneStrategy;

/// Items generated for one record.
#[derive(Debug, Clone)]
pub struct Expansion {
    record: String,
    file: syn::File,
}

impl Expansion {
    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn items(&self) -> &[syn::Item] {
        &self.file.items
    }

    /// Formatted Rust source for the generated items.
    #[cfg(feature = "pretty")]
    pub fn to_source(&self) -> String {
        prettyplease::unparse(&self.file)
    }
}

impl ToTokens for Expansion {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for item in &self.file.items {
            item.to_tokens(tokens);
        }
    }
}

/// Generate the `Clonable` impl for a record.
///
/// With `auto_generate` off, the output only asserts at compile time that the
/// type implements `Clonable`, leaving the impl to be written by hand.
pub fn synthesize(spec: &RecordSpec) -> CodegenResult<Expansion> {
    let name = match &spec.ident {
        Some(declared) => declared.clone(),
        None => ident(&spec.name).ok_or_else(|| {
            CodegenError::generation(&spec.name, format!("`{}` is not a valid type name", spec.name))
        })?,
    };

    let tokens = if spec.auto_generate {
        clone_impl(spec, &name)?
    } else {
        declared_only(spec, &name)
    };

    // A name that tokenizes but is reserved (`type`, `fn`, ...) only fails here.
    let file = syn::parse2::<syn::File>(tokens)
        .map_err(|e| CodegenError::generation(&spec.name, format!("emitted code does not parse: {e}")))?;

    Ok(Expansion { record: spec.name.clone(), file })
}

fn clone_impl(spec: &RecordSpec, name: &Ident) -> CodegenResult<TokenStream> {
    let runtime = &spec.runtime;

    let mut inits = Vec::with_capacity(spec.fields.len());
    for field in &spec.fields {
        let member = field.member().ok_or_else(|| {
            CodegenError::generation(&spec.name, format!("`{}` is not a valid field name", field.name))
        })?;
        let value = match field.strategy {
            CloneStrategy::Shallow => quote! {
                ::core::clone::Clone::clone(&self.#member)
            },
            CloneStrategy::Deep if field.is_optional() => quote! {
                self.#member.as_ref().map(#runtime::Clonable::clone)
            },
            CloneStrategy::Deep => quote! {
                #runtime::Clonable::clone(&self.#member)
            },
        };
        inits.push(quote! { #member: #value });
    }

    let mut generics = spec.generics.clone();
    if generics.type_params().next().is_some() {
        let predicates = field_bounds(spec);
        generics.make_where_clause().predicates.extend(predicates);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #runtime::Clonable for #name #ty_generics #where_clause {
            #[inline]
            fn clone(&self) -> Self {
                Self {
                    #(#inits,)*
                }
            }
        }
    })
}

/// One bound per typed field, so generic records only require what their
/// fields' strategies actually use.
fn field_bounds(spec: &RecordSpec) -> Vec<WherePredicate> {
    let runtime = &spec.runtime;
    spec.fields
        .iter()
        .filter_map(|field: &FieldSpec| {
            let ty = field.ty.as_ref()?;
            Some(match field.strategy {
                CloneStrategy::Shallow => parse_quote!(#ty: ::core::clone::Clone),
                CloneStrategy::Deep => match field.optional_inner() {
                    Some(inner) => parse_quote!(#inner: #runtime::Clonable),
                    None => parse_quote!(#ty: #runtime::Clonable),
                },
            })
        })
        .collect()
}

fn declared_only(spec: &RecordSpec, name: &Ident) -> TokenStream {
    let runtime = &spec.runtime;
    let (impl_generics, ty_generics, where_clause) = spec.generics.split_for_impl();

    quote! {
        #[allow(dead_code)]
        const _: () = {
            fn assert_clonable<T: #runtime::Clonable>() {}

            fn declared #impl_generics () #where_clause {
                assert_clonable::<#name #ty_generics>();
            }
        };
    }
}
