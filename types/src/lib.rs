//! Shared type definitions for entable
//!
//! This crate provides the leaf enums used by both the runtime crate and the
//! derive macro:
//!
//! - [`ValueType`] - Semantic value type tag of a mapped column
//! - [`IdentityDialect`] - Known identity retrieval statements per database
//! - [`OrderDirection`] - ASC / DESC
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod dialect;
mod order;
mod value_type;

pub use dialect::{DialectParseError, IdentityDialect};
pub use order::OrderDirection;
pub use value_type::ValueType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{IdentityDialect, OrderDirection, ValueType};
}
