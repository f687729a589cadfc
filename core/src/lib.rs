//! Entity-to-table metadata resolution and SQL fragment synthesis.
//!
//! A record type describes itself with a static [`TypeDecl`] (usually emitted
//! by `#[derive(Entity)]`). An [`EntityRegistry`] resolves that declaration
//! once into a [`TableDescriptor`], which then produces select lists, key
//! predicates, ORDER BY clauses and statement templates.

pub mod config;
pub mod decl;
pub mod discovery;
pub mod error;
pub mod keygen;
pub mod naming;
pub mod registry;
pub mod resolver;
pub mod statement;
pub mod table;
mod tracing;

// Re-export key types and traits
pub use config::{ConfigError, MapperConfig};
pub use decl::{Entity, FieldDecl, GenerationDecl, GenerationStrategy, TypeDecl, TypeKind};
pub use entable_types::{IdentityDialect, OrderDirection, ValueType};
pub use error::{EntableError, Result};
pub use keygen::KeyGeneration;
pub use naming::NamingStyle;
pub use registry::{EntityRegistry, RegistryStats};
pub use statement::{
    ConditionalPredicate, DynamicSql, KeyOrder, KeyRetrieval, SqlSegment, StatementBuilder,
    StatementTemplate,
};
pub use table::{ColumnDescriptor, GeneratedKeys, TableDescriptor};
