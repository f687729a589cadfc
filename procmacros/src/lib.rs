#![recursion_limit = "128"]

extern crate proc_macro;

mod entity;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `Entity`, emitting the static mapping declaration for a struct.
///
/// Struct attributes, all optional:
///
/// - `#[entity(table = "sys_user")]` - explicit table name
/// - `#[entity(style = "camelhump_and_uppercase")]` - naming style for this type
/// - `#[entity(kind = "map")]` - structure kind: `record` (default), `map`, `collection`
/// - `#[entity(mapped)]` - a mapped entity; types extending it always inherit its fields
/// - `#[entity(extends = Base)]` - inherit the fields of another `Entity`
///
/// Field attributes, all optional:
///
/// - `#[column(name = "user_name")]` - explicit column name
/// - `#[column(style = "normal")]` - naming style for this column
/// - `#[column(id)]` - part of the primary key
/// - `#[column(transient)]` - not mapped
/// - `#[column(order_by)]`, `#[column(order_by = "desc")]` - default ordering
/// - `#[column(value_type = "json")]` - override the inferred value type
/// - `#[column(sequence = "seq_user")]` - key drawn from a sequence
/// - `#[column(uuid)]` - client-generated UUID key
/// - `#[column(generated(strategy = "identity", generator = "MySql"))]` - generated key
///
/// # Example
///
/// ```ignore
/// use entable::Entity;
///
/// #[derive(Entity)]
/// #[entity(table = "sys_user")]
/// struct User {
///     #[column(id, generated(generator = "JDBC"))]
///     id: i64,
///     user_name: String,
///     #[column(order_by = "desc")]
///     status: String,
///     #[column(transient)]
///     scratch: Option<String>,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match entity::derive_entity(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
