//! Field discovery across a declared inheritance chain.

use crate::decl::{FieldDecl, TypeDecl};

/// Collect the fields to map for `decl`, closest type first.
///
/// Type-level and transient fields are dropped. The walk continues into a
/// parent only when the parent is a mapped entity or a plain record; container
/// base types (map-like, collection-like) end it.
#[must_use]
pub fn discover_fields(decl: &'static TypeDecl) -> Vec<&'static FieldDecl> {
    let mut fields = Vec::new();
    let mut visited: Vec<*const TypeDecl> = Vec::new();
    let mut current = Some(decl);

    while let Some(ty) = current {
        if visited.contains(&std::ptr::from_ref(ty)) {
            break;
        }
        visited.push(std::ptr::from_ref(ty));

        fields.extend(
            ty.fields
                .iter()
                .filter(|field| !field.is_static && !field.is_transient),
        );

        current = ty
            .parent()
            .filter(|parent| parent.entity || !parent.kind.is_container());
    }

    fields
}
