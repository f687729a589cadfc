//! Centralized path definitions for generated code.
//!
//! Generated code names the runtime through the facade crate as it appears in
//! the caller's manifest, falling back to `entable-core` for crates that only
//! depend on the core.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Root path of the runtime crate.
pub(crate) fn runtime() -> TokenStream {
    let found = crate_name("entable")
        .map(|found| (found, "entable"))
        .or_else(|_| crate_name("entable-core").map(|found| (found, "entable_core")));

    match found {
        // The facade never derives on its own types, so `Itself` only shows up
        // for its integration tests and binaries, which see it under its name.
        Ok((FoundCrate::Itself, default_name)) => {
            let ident = Ident::new(default_name, Span::call_site());
            quote!(::#ident)
        }
        Ok((FoundCrate::Name(name), _)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::entable),
    }
}

pub(crate) fn entity_trait(root: &TokenStream) -> TokenStream {
    quote!(#root::Entity)
}

pub(crate) fn type_decl(root: &TokenStream) -> TokenStream {
    quote!(#root::TypeDecl)
}

pub(crate) fn field_decl(root: &TokenStream) -> TokenStream {
    quote!(#root::FieldDecl)
}

pub(crate) fn value_type(root: &TokenStream) -> TokenStream {
    quote!(#root::ValueType)
}

pub(crate) fn order_direction(root: &TokenStream) -> TokenStream {
    quote!(#root::OrderDirection)
}

pub(crate) fn generation_strategy(root: &TokenStream) -> TokenStream {
    quote!(#root::GenerationStrategy)
}

pub(crate) fn naming_style(root: &TokenStream) -> TokenStream {
    quote!(#root::NamingStyle)
}

pub(crate) fn type_kind(root: &TokenStream) -> TokenStream {
    quote!(#root::TypeKind)
}
