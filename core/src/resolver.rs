//! Builds a [`TableDescriptor`] from a type declaration.

use crate::decl::TypeDecl;
use crate::discovery::discover_fields;
use crate::error::Result;
use crate::keygen::{KeyGeneration, classify};
use crate::naming::{NamingStyle, resolve_name};
use crate::table::{ColumnDescriptor, GeneratedKeys, TableBuilder, TableDescriptor};

/// Resolve the full table mapping for `decl`.
///
/// `default_style` applies unless the type declares its own style; a field's
/// own style wins over both for that field's column. Any
/// declaration error aborts the whole resolution; nothing partial is returned.
pub fn resolve_table(decl: &'static TypeDecl, default_style: NamingStyle) -> Result<TableDescriptor> {
    let style = decl.style.unwrap_or(default_style);
    let table_name = resolve_name(decl.name, decl.table, style);
    let mut builder = TableBuilder::new(decl.name, table_name.as_ref(), decl.kind);

    for field in discover_fields(decl) {
        let key_generation = classify(decl.name, field)?;
        let column = ColumnDescriptor {
            property: field.name,
            column: resolve_name(field.name, field.column, field.style.unwrap_or(style))
                .as_ref()
                .into(),
            value_type: field.value_type,
            primary_key: field.is_id,
            order_by: field.order_by,
            key_generation,
        };

        let keys = matches!(column.key_generation, KeyGeneration::JdbcIdentity).then(|| {
            GeneratedKeys {
                property: column.property,
                column: column.column.clone(),
            }
        });

        if builder.push(column)
            && let Some(keys) = keys
            && builder.set_generated_keys(keys).is_some()
        {
            crate::entable_trace_warn!(
                decl.name,
                "more than one JDBC identity column declared; the last one receives the key"
            );
        }
    }

    Ok(builder.build())
}
