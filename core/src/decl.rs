//! Static declarations describing how a record type maps to a table.
//!
//! A declaration is what `#[derive(Entity)]` emits. It can also be written by
//! hand with the const builders:
//!
//! ```
//! use entable_core::{FieldDecl, GenerationStrategy, TypeDecl, ValueType};
//!
//! static USER: TypeDecl = TypeDecl::new(
//!     "User",
//!     &[
//!         FieldDecl::new("id", ValueType::Integer)
//!             .id()
//!             .generated_value(GenerationStrategy::Identity, "MySql"),
//!         FieldDecl::new("userName", ValueType::Text),
//!         FieldDecl::new("cache", ValueType::Other).transient(),
//!     ],
//! )
//! .with_table("sys_user");
//!
//! assert_eq!(USER.fields.len(), 3);
//! ```

use entable_types::{OrderDirection, ValueType};

use crate::naming::NamingStyle;

/// A record type with a static mapping declaration.
pub trait Entity: 'static {
    fn declaration() -> &'static TypeDecl;
}

/// What kind of structure a declared type is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A plain record with named fields
    #[default]
    Record,
    /// A schemaless map-like type; selected columns are never aliased
    Map,
    /// A collection-like container
    Collection,
}

impl TypeKind {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("record") {
            Some(TypeKind::Record)
        } else if s.eq_ignore_ascii_case("map") {
            Some(TypeKind::Map)
        } else if s.eq_ignore_ascii_case("collection") {
            Some(TypeKind::Collection)
        } else {
            None
        }
    }

    /// Map-like and collection-like types are container base types.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, TypeKind::Map | TypeKind::Collection)
    }
}

/// Declaration of a record type.
#[derive(Debug)]
pub struct TypeDecl {
    /// Structural type name, used for the default table name
    pub name: &'static str,
    /// Explicit table name; ignored when empty
    pub table: Option<&'static str>,
    /// Naming style for this type, overriding the configured default
    pub style: Option<NamingStyle>,
    /// Marked as a mapped entity in its own right
    pub entity: bool,
    pub kind: TypeKind,
    /// Fields declared directly on this type, in declaration order
    pub fields: &'static [FieldDecl],
    /// Parent type whose fields are inherited
    pub parent: Option<fn() -> &'static TypeDecl>,
}

impl TypeDecl {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Self {
            name,
            table: None,
            style: None,
            entity: false,
            kind: TypeKind::Record,
            fields,
            parent: None,
        }
    }

    #[must_use]
    pub const fn with_table(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: NamingStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn mapped_entity(mut self) -> Self {
        self.entity = true;
        self
    }

    #[must_use]
    pub const fn extends(mut self, parent: fn() -> &'static TypeDecl) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The parent declaration, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'static TypeDecl> {
        self.parent.map(|parent| parent())
    }
}

/// Key-generation strategy named by a generated-value declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenerationStrategy {
    #[default]
    Auto,
    Identity,
    Sequence,
    Table,
}

impl GenerationStrategy {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(GenerationStrategy::Auto),
            "identity" => Some(GenerationStrategy::Identity),
            "sequence" => Some(GenerationStrategy::Sequence),
            "table" => Some(GenerationStrategy::Table),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            GenerationStrategy::Auto => "AUTO",
            GenerationStrategy::Identity => "IDENTITY",
            GenerationStrategy::Sequence => "SEQUENCE",
            GenerationStrategy::Table => "TABLE",
        }
    }

    /// Variant name, as written in generated code.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            GenerationStrategy::Auto => "Auto",
            GenerationStrategy::Identity => "Identity",
            GenerationStrategy::Sequence => "Sequence",
            GenerationStrategy::Table => "Table",
        }
    }
}

/// Raw key-generation declaration on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationDecl {
    /// Values come from a named database sequence
    Sequence { name: &'static str },
    /// Generated value, disambiguated by its generator token
    Generated {
        strategy: GenerationStrategy,
        generator: &'static str,
    },
}

/// Declaration of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    /// Structural field name (the property)
    pub name: &'static str,
    /// Explicit column name; ignored when empty
    pub column: Option<&'static str>,
    pub value_type: ValueType,
    pub is_id: bool,
    pub is_transient: bool,
    /// Type-level field, never mapped
    pub is_static: bool,
    pub order_by: Option<OrderDirection>,
    pub generation: Option<GenerationDecl>,
    /// Naming style for this field's column, overriding the type's style
    pub style: Option<NamingStyle>,
}

impl FieldDecl {
    #[must_use]
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            column: None,
            value_type,
            is_id: false,
            is_transient: false,
            is_static: false,
            order_by: None,
            generation: None,
            style: None,
        }
    }

    #[must_use]
    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: NamingStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub const fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    #[must_use]
    pub const fn type_level(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub const fn ordered(mut self, direction: OrderDirection) -> Self {
        self.order_by = Some(direction);
        self
    }

    #[must_use]
    pub const fn sequence(mut self, name: &'static str) -> Self {
        self.generation = Some(GenerationDecl::Sequence { name });
        self
    }

    #[must_use]
    pub const fn generated_value(
        mut self,
        strategy: GenerationStrategy,
        generator: &'static str,
    ) -> Self {
        self.generation = Some(GenerationDecl::Generated {
            strategy,
            generator,
        });
        self
    }
}
