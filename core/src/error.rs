use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum EntableError {
    /// Metadata or SQL text requested for a type that was never resolved
    #[error("Unresolved type: no table mapping has been resolved for {0}")]
    UnresolvedType(&'static str),

    /// Malformed key-generation declaration on a field
    #[error("Invalid declaration on {type_name}.{field}: {reason}")]
    InvalidDeclaration {
        type_name: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Key-generation strategy outside the supported set
    #[error(
        "Unsupported key strategy on {type_name}.{field}: {strategy}. Supported forms are \
         generator = \"UUID\", generator = \"JDBC\", and strategy = identity with an optional \
         dialect or retrieval statement as generator"
    )]
    UnsupportedKeyStrategy {
        type_name: &'static str,
        field: &'static str,
        strategy: String,
    },

    /// Error loading configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for metadata resolution and SQL synthesis
pub type Result<T> = std::result::Result<T, EntableError>;
