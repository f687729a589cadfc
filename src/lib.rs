//! # entable
//!
//! Resolves how a record type maps to a relational table, caches that mapping
//! for the lifetime of a registry, and synthesizes the SQL fragments and
//! statement templates built from it.
//!
//! ## Quick Start
//!
//! ```rust
//! use entable::prelude::*;
//!
//! #[derive(Entity)]
//! struct User {
//!     #[column(id)]
//!     id: i64,
//!     #[column(name = "usr_name")]
//!     user_name: String,
//!     #[column(order_by = "desc")]
//!     status: String,
//! }
//!
//! # fn main() -> entable::Result<()> {
//! let registry = EntityRegistry::new(MapperConfig::default());
//! let table = registry.resolve::<User>()?;
//!
//! assert_eq!(table.name(), "user");
//! assert_eq!(table.select_columns(), "id,usr_name AS user_name,status");
//! assert_eq!(table.primary_key_where(), "id = ?");
//! assert_eq!(table.order_by_clause(), "status DESC");
//!
//! let sql = registry.statements::<User>()?.find_by_primary_key().static_sql();
//! assert_eq!(
//!     sql.as_deref(),
//!     Some("SELECT id,usr_name AS user_name,status FROM user WHERE id = ?")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature   | Effect                                               |
//! |-----------|------------------------------------------------------|
//! | `tracing` | Emit resolution events through the `tracing` crate   |
//! | `serde`   | Serialize/deserialize `ValueType`, `IdentityDialect`  |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for entable operations
pub use entable_core::error::Result;

/// Derive macro emitting a static mapping declaration
pub use entable_macros::Entity;

pub use entable_core::{
    ColumnDescriptor, ConditionalPredicate, DynamicSql, Entity, EntityRegistry, FieldDecl,
    GeneratedKeys, GenerationDecl, GenerationStrategy, IdentityDialect, KeyGeneration, KeyOrder,
    KeyRetrieval, MapperConfig, NamingStyle, OrderDirection, RegistryStats, SqlSegment,
    StatementBuilder, StatementTemplate, TableDescriptor, TypeDecl, TypeKind, ValueType,
};

/// Error types
pub mod error {
    pub use entable_core::config::ConfigError;
    pub use entable_core::error::EntableError;
}

/// Core building blocks, for callers that assemble mappings by hand.
pub mod core {
    pub use entable_core::discovery::discover_fields;
    pub use entable_core::keygen::{JDBC_GENERATOR, UUID_GENERATOR, classify};
    pub use entable_core::naming::resolve_name;
    pub use entable_core::resolver::resolve_table;
}

/// Shared type tags.
pub use entable_types as types;

pub mod prelude {
    pub use crate::{
        DynamicSql, Entity, EntityRegistry, MapperConfig, NamingStyle, OrderDirection,
        StatementTemplate, TableDescriptor,
    };
}
