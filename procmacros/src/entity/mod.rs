mod attributes;

use entable_types::ValueType;
use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Error, Field, Fields, Result};

use crate::paths;
use attributes::{ColumnAttributes, EntityAttributes, GenerationAttr};

/// Generate the `Entity` impl for a struct with named fields.
pub(crate) fn derive_entity(input: DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input.ident,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Entity can only be derived for structs",
            ));
        }
    };

    let root = paths::runtime();
    let attrs = EntityAttributes::from_attrs(&input.attrs)?;
    let field_decls = fields
        .iter()
        .map(|field| field_decl(&root, field))
        .collect::<Result<Vec<_>>>()?;

    let struct_name = &input.ident;
    let type_name = struct_name.to_string();
    let entity_trait = paths::entity_trait(&root);
    let type_decl = paths::type_decl(&root);

    let mut builder = quote!(#type_decl::new(#type_name, &[#(#field_decls),*]));
    if let Some(table) = &attrs.table {
        builder.extend(quote!(.with_table(#table)));
    }
    if let Some(style) = attrs.style {
        let naming_style = paths::naming_style(&root);
        let variant = Ident::new(style.variant_name(), Span::call_site());
        builder.extend(quote!(.with_style(#naming_style::#variant)));
    }
    if let Some(kind) = attrs.kind {
        let type_kind = paths::type_kind(&root);
        let variant = Ident::new(&format!("{kind:?}"), Span::call_site());
        builder.extend(quote!(.with_kind(#type_kind::#variant)));
    }
    if attrs.mapped {
        builder.extend(quote!(.mapped_entity()));
    }
    if let Some(parent) = &attrs.extends {
        builder.extend(quote!(.extends(<#parent as #entity_trait>::declaration)));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #entity_trait for #struct_name #ty_generics #where_clause {
            fn declaration() -> &'static #type_decl {
                static DECLARATION: #type_decl = #builder;
                &DECLARATION
            }
        }
    })
}

fn field_decl(root: &TokenStream, field: &Field) -> Result<TokenStream> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
    let attrs = ColumnAttributes::from_attrs(&field.attrs)?;

    // Raw identifiers map by their bare name.
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();

    let value_type = attrs.value_type.unwrap_or_else(|| {
        ValueType::from_type_string(&field.ty.to_token_stream().to_string())
    });
    let value_type_path = paths::value_type(root);
    let value_variant = Ident::new(value_type.variant_name(), Span::call_site());
    let field_decl = paths::field_decl(root);

    let mut decl = quote!(#field_decl::new(#name, #value_type_path::#value_variant));
    if let Some(column) = &attrs.name {
        decl.extend(quote!(.with_column(#column)));
    }
    if let Some(style) = attrs.style {
        let naming_style = paths::naming_style(root);
        let variant = Ident::new(style.variant_name(), Span::call_site());
        decl.extend(quote!(.with_style(#naming_style::#variant)));
    }
    if attrs.id {
        decl.extend(quote!(.id()));
    }
    if attrs.transient {
        decl.extend(quote!(.transient()));
    }
    if let Some(direction) = attrs.order_by {
        let order_direction = paths::order_direction(root);
        let variant = Ident::new(direction.variant_name(), Span::call_site());
        decl.extend(quote!(.ordered(#order_direction::#variant)));
    }
    match &attrs.generation {
        Some(GenerationAttr::Sequence(sequence)) => {
            decl.extend(quote!(.sequence(#sequence)));
        }
        Some(GenerationAttr::Generated {
            strategy,
            generator,
        }) => {
            let generation_strategy = paths::generation_strategy(root);
            let variant = Ident::new(strategy.variant_name(), Span::call_site());
            decl.extend(quote!(.generated_value(#generation_strategy::#variant, #generator)));
        }
        None => {}
    }

    Ok(decl)
}
