//! Key-generation classification.

use compact_str::CompactString;
use entable_types::IdentityDialect;

use crate::decl::{FieldDecl, GenerationDecl, GenerationStrategy};
use crate::error::{EntableError, Result};

/// Generator token for client-side UUID keys
pub const UUID_GENERATOR: &str = "UUID";
/// Generator token for keys returned by the driver after insert
pub const JDBC_GENERATOR: &str = "JDBC";

/// How a column's key value is produced. Exactly one policy applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KeyGeneration {
    #[default]
    None,
    /// Generated client-side as a UUID
    Uuid,
    /// Returned by the driver after insert
    JdbcIdentity,
    /// Auto-increment column; the text reads back the generated value
    DatabaseIdentity { generator: Option<CompactString> },
    /// Drawn from a database sequence
    Sequence { name: CompactString },
}

impl KeyGeneration {
    /// Key produced by the database on insert, whether read back by the
    /// driver or by a retrieval statement.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(
            self,
            KeyGeneration::JdbcIdentity | KeyGeneration::DatabaseIdentity { .. }
        )
    }
}

/// Classify a field's generation declaration.
pub fn classify(type_name: &'static str, field: &FieldDecl) -> Result<KeyGeneration> {
    match field.generation {
        None => Ok(KeyGeneration::None),
        Some(GenerationDecl::Sequence { name }) => {
            if name.is_empty() {
                return Err(EntableError::InvalidDeclaration {
                    type_name,
                    field: field.name,
                    reason: "sequence declaration has no sequence name".to_string(),
                });
            }
            Ok(KeyGeneration::Sequence { name: name.into() })
        }
        Some(GenerationDecl::Generated {
            strategy,
            generator,
        }) => classify_generated(type_name, field, strategy, generator),
    }
}

fn classify_generated(
    type_name: &'static str,
    field: &FieldDecl,
    strategy: GenerationStrategy,
    generator: &'static str,
) -> Result<KeyGeneration> {
    match (generator, strategy) {
        (UUID_GENERATOR, _) => Ok(KeyGeneration::Uuid),
        (JDBC_GENERATOR, _) => Ok(KeyGeneration::JdbcIdentity),
        ("", GenerationStrategy::Identity) => {
            Ok(KeyGeneration::DatabaseIdentity { generator: None })
        }
        (token, GenerationStrategy::Identity) => Ok(KeyGeneration::DatabaseIdentity {
            generator: Some(IdentityDialect::resolve_token(token).into()),
        }),
        ("", other) => Err(EntableError::UnsupportedKeyStrategy {
            type_name,
            field: field.name,
            strategy: other.as_str().to_string(),
        }),
        (token, other) => Err(EntableError::UnsupportedKeyStrategy {
            type_name,
            field: field.name,
            strategy: format!("{} with generator \"{token}\"", other.as_str()),
        }),
    }
}
