//! Finds `#[derive(Clonable)]` declarations in a parsed Rust file.

use syn::punctuated::Punctuated;
use syn::{Attribute, DeriveInput, Item, Token};

const DERIVE_NAME: &str = "Clonable";

/// Every struct, enum or union in `file` (including inline modules) whose
/// derive list names `Clonable`, in source order.
pub fn derive_targets(file: &syn::File) -> Vec<DeriveInput> {
    let mut targets = Vec::new();
    collect(&file.items, &mut targets);
    targets
}

fn collect(items: &[Item], targets: &mut Vec<DeriveInput>) {
    for item in items {
        match item {
            Item::Struct(item) if derives_clonable(&item.attrs) => {
                targets.push(DeriveInput::from(item.clone()));
            }
            Item::Enum(item) if derives_clonable(&item.attrs) => {
                targets.push(DeriveInput::from(item.clone()));
            }
            Item::Union(item) if derives_clonable(&item.attrs) => {
                targets.push(DeriveInput::from(item.clone()));
            }
            Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    collect(items, targets);
                }
            }
            _ => {}
        }
    }
}

fn derives_clonable(attrs: &[Attribute]) -> bool {
    attrs.iter().filter(|attr| attr.path().is_ident("derive")).any(|attr| {
        attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            .map(|paths| {
                paths
                    .iter()
                    .any(|path| path.segments.last().is_some_and(|s| s.ident == DERIVE_NAME))
            })
            .unwrap_or(false)
    })
}
