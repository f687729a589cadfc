//! Statement text for the canonical query shapes.
//!
//! Only the always-present parts are produced here. Predicates that depend on
//! which values a caller supplied are handed to a [`DynamicSql`]
//! implementation as a [`SqlSegment::Where`].

use std::borrow::Cow;
use std::sync::Arc;

use entable_types::IdentityDialect;

use crate::config::MapperConfig;
use crate::keygen::KeyGeneration;
use crate::table::{ColumnDescriptor, TableDescriptor};

/// `column = ?` bound to `property`, included only when the caller supplies
/// a value for the property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalPredicate {
    pub column: String,
    pub property: &'static str,
}

impl ConditionalPredicate {
    /// The predicate text without any leading boolean operator.
    #[must_use]
    pub fn sql(&self) -> String {
        format!("{} = ?", self.column)
    }
}

/// Composes the WHERE clause out of conditional predicates at query time.
pub trait DynamicSql {
    /// The complete clause including the `WHERE` keyword, or `None` when no
    /// predicate applies.
    fn where_clause(&self, predicates: &[ConditionalPredicate]) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlSegment {
    Text(String),
    Where(Vec<ConditionalPredicate>),
}

/// Statement text split into static parts and a dynamic WHERE part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementTemplate {
    segments: Vec<SqlSegment>,
}

impl StatementTemplate {
    fn new(segments: Vec<SqlSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[SqlSegment] {
        &self.segments
    }

    /// The full text when no part depends on caller values.
    #[must_use]
    pub fn static_sql(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                SqlSegment::Text(text) => parts.push(text.as_str()),
                SqlSegment::Where(_) => return None,
            }
        }
        Some(parts.join(" "))
    }

    /// Render the statement, delegating WHERE composition to `dynamic`.
    #[must_use]
    pub fn render<D: DynamicSql + ?Sized>(&self, dynamic: &D) -> String {
        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                SqlSegment::Text(text) => parts.push(Cow::Borrowed(text.as_str())),
                SqlSegment::Where(predicates) => {
                    if let Some(clause) = dynamic.where_clause(predicates)
                        && !clause.is_empty()
                    {
                        parts.push(Cow::Owned(clause));
                    }
                }
            }
        }
        parts.join(" ")
    }
}

/// Whether a key-retrieval statement runs before or after the insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyOrder {
    Before,
    After,
}

/// Key-retrieval text for one column and when it runs relative to the insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRetrieval<'a> {
    pub statement: Cow<'a, str>,
    pub order: KeyOrder,
}

/// Builds statements for one resolved table.
#[derive(Debug, Clone)]
pub struct StatementBuilder<'a> {
    table: Arc<TableDescriptor>,
    config: &'a MapperConfig,
}

impl<'a> StatementBuilder<'a> {
    #[must_use]
    pub fn new(table: Arc<TableDescriptor>, config: &'a MapperConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &TableDescriptor {
        &self.table
    }

    /// Table name qualified with the configured catalog or schema.
    pub fn table_name(&self) -> Cow<'_, str> {
        match self.config.table_prefix() {
            Some(prefix) => Cow::Owned(format!("{prefix}.{}", self.table.name())),
            None => Cow::Borrowed(self.table.name()),
        }
    }

    /// One conditional `column = ?` per mapped column, in column order.
    #[must_use]
    pub fn conditional_predicates(&self) -> Vec<ConditionalPredicate> {
        self.table
            .columns()
            .iter()
            .map(|c| ConditionalPredicate {
                column: c.column().to_string(),
                property: c.property(),
            })
            .collect()
    }

    fn select_from(&self) -> String {
        format!(
            "SELECT {} FROM {}",
            self.table.select_columns(),
            self.table_name()
        )
    }

    fn order_by(&self) -> Option<SqlSegment> {
        let clause = self.table.order_by_clause();
        (!clause.is_empty()).then(|| SqlSegment::Text(format!("ORDER BY {clause}")))
    }

    /// Select rows matching every non-null property of an example value,
    /// in the declared order.
    #[must_use]
    pub fn find_by_example(&self) -> StatementTemplate {
        let mut segments = vec![
            SqlSegment::Text(self.select_from()),
            SqlSegment::Where(self.conditional_predicates()),
        ];
        segments.extend(self.order_by());
        StatementTemplate::new(segments)
    }

    /// Like [`find_by_example`](Self::find_by_example) without ordering, for
    /// single-row lookups.
    #[must_use]
    pub fn find_one(&self) -> StatementTemplate {
        StatementTemplate::new(vec![
            SqlSegment::Text(self.select_from()),
            SqlSegment::Where(self.conditional_predicates()),
        ])
    }

    #[must_use]
    pub fn find_by_primary_key(&self) -> StatementTemplate {
        StatementTemplate::new(vec![SqlSegment::Text(format!(
            "{} WHERE {}",
            self.select_from(),
            self.table.primary_key_where()
        ))])
    }

    #[must_use]
    pub fn exists_by_primary_key(&self) -> StatementTemplate {
        StatementTemplate::new(vec![SqlSegment::Text(format!(
            "SELECT CASE WHEN COUNT(*) > 0 THEN 1 ELSE 0 END AS result FROM {} WHERE {}",
            self.table_name(),
            self.table.primary_key_where()
        ))])
    }

    #[must_use]
    pub fn count(&self) -> StatementTemplate {
        StatementTemplate::new(vec![
            SqlSegment::Text(format!("SELECT COUNT(*) FROM {}", self.table_name())),
            SqlSegment::Where(self.conditional_predicates()),
        ])
    }

    /// Every row, unordered. Declared ordering applies to
    /// [`find_by_example`](Self::find_by_example) only.
    #[must_use]
    pub fn find_all(&self) -> StatementTemplate {
        StatementTemplate::new(vec![SqlSegment::Text(self.select_from())])
    }

    /// Statement reading back an identity value after insert.
    ///
    /// The column's own generator text wins; otherwise the configured default
    /// identity (a dialect name or a literal statement) applies. `None` for
    /// columns that are not database identities.
    pub fn identity_retrieval<'c>(&'c self, column: &'c ColumnDescriptor) -> Option<&'c str> {
        match column.key_generation() {
            KeyGeneration::DatabaseIdentity {
                generator: Some(generator),
            } => Some(generator.as_str()),
            KeyGeneration::DatabaseIdentity { generator: None } => self
                .config
                .identity
                .as_deref()
                .filter(|identity| !identity.is_empty())
                .map(IdentityDialect::resolve_token),
            _ => None,
        }
    }

    /// Next-value text for a sequence column, rendered from the configured
    /// sequence format.
    #[must_use]
    pub fn sequence_next_value(&self, column: &ColumnDescriptor) -> Option<String> {
        let KeyGeneration::Sequence { name } = column.key_generation() else {
            return None;
        };
        Some(
            self.config
                .sequence_format
                .replace("{sequence}", name)
                .replace("{column}", column.column())
                .replace("{property}", column.property())
                .replace("{table}", self.table.name()),
        )
    }

    /// Key-retrieval text for `column` with its ordering.
    ///
    /// Sequence values are drawn before the insert. Database identities are
    /// read back after it unless `before` is configured. `None` for columns
    /// with no retrieval text, including driver-returned keys.
    pub fn key_retrieval<'c>(&'c self, column: &'c ColumnDescriptor) -> Option<KeyRetrieval<'c>> {
        let generation = column.key_generation();
        if generation.is_identity() {
            let order = if self.config.before {
                KeyOrder::Before
            } else {
                KeyOrder::After
            };
            return self
                .identity_retrieval(column)
                .map(|statement| KeyRetrieval {
                    statement: Cow::Borrowed(statement),
                    order,
                });
        }
        self.sequence_next_value(column)
            .map(|statement| KeyRetrieval {
                statement: Cow::Owned(statement),
                order: KeyOrder::Before,
            })
    }
}
