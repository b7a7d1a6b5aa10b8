//! `#[derive(Clonable)]` implementation

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse2, DeriveInput, Error, Result};

pub fn derive_clonable(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;

    let expansion = clonable_codegen::expand_derive(&input)
        .map_err(|e| Error::new_spanned(&input.ident, format!("{}: {}", e.kind(), e)))?;

    Ok(expansion.into_token_stream())
}
