//! Resolved table and column descriptors, and the SQL fragments derived from them.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use compact_str::CompactString;
use entable_types::{OrderDirection, ValueType};
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::decl::TypeKind;
use crate::keygen::KeyGeneration;

/// Quote pairs recognized when deciding whether a column is just its
/// property name escaped.
const QUOTE_PAIRS: [(char, char); 3] = [('`', '`'), ('"', '"'), ('[', ']')];

/// Mapping of one field to one column.
///
/// Two descriptors are equal when their column names are equal ignoring
/// ASCII case; the property does not participate.
#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    pub(crate) property: &'static str,
    pub(crate) column: CompactString,
    pub(crate) value_type: ValueType,
    pub(crate) primary_key: bool,
    pub(crate) order_by: Option<OrderDirection>,
    pub(crate) key_generation: KeyGeneration,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(property: &'static str, column: impl Into<CompactString>) -> Self {
        Self {
            property,
            column: column.into(),
            value_type: ValueType::Other,
            primary_key: false,
            order_by: None,
            key_generation: KeyGeneration::None,
        }
    }

    pub fn property(&self) -> &'static str {
        self.property
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn order_by(&self) -> Option<OrderDirection> {
        self.order_by
    }

    pub fn key_generation(&self) -> &KeyGeneration {
        &self.key_generation
    }

    /// Whether selecting this column needs `AS property` to land on the field.
    #[must_use]
    pub fn needs_alias(&self) -> bool {
        !self.column.eq_ignore_ascii_case(self.property) && !self.is_quoted_property()
    }

    fn is_quoted_property(&self) -> bool {
        QUOTE_PAIRS.iter().any(|&(open, close)| {
            self.column
                .strip_prefix(open)
                .and_then(|inner| inner.strip_suffix(close))
                .is_some_and(|inner| inner.eq_ignore_ascii_case(self.property))
        })
    }
}

impl PartialEq for ColumnDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.column.eq_ignore_ascii_case(&other.column)
    }
}

impl Eq for ColumnDescriptor {}

impl Hash for ColumnDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.column.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

/// Property and column that receive a driver-returned key after insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedKeys {
    pub property: &'static str,
    pub column: CompactString,
}

/// Resolved mapping of one record type to one table.
///
/// Structurally immutable once built. The SQL fragments are computed on first
/// use and memoized; concurrent first calls may both compute, one result is kept.
#[derive(Debug)]
pub struct TableDescriptor {
    entity: &'static str,
    name: CompactString,
    kind: TypeKind,
    columns: Vec<ColumnDescriptor>,
    primary_key: SmallVec<[usize; 2]>,
    generated_keys: Option<GeneratedKeys>,

    select_columns: OnceLock<String>,
    all_columns: OnceLock<String>,
    primary_key_where: OnceLock<String>,
    order_by_clause: OnceLock<String>,
}

impl TableDescriptor {
    /// Name of the declared type this table was resolved from.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Resolved table name, unqualified.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// All mapped columns in declaration order, closest type first.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Primary-key columns. Every column when none was declared.
    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &ColumnDescriptor> + '_ {
        self.primary_key.iter().map(|&index| &self.columns[index])
    }

    /// Look up a column by its property name.
    pub fn column_for(&self, property: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.property == property)
    }

    pub fn generated_keys(&self) -> Option<&GeneratedKeys> {
        self.generated_keys.as_ref()
    }

    /// Property receiving the driver-returned key.
    pub fn key_properties(&self) -> Option<&'static str> {
        self.generated_keys.as_ref().map(|keys| keys.property)
    }

    /// Column holding the driver-returned key.
    pub fn key_columns(&self) -> Option<&str> {
        self.generated_keys.as_ref().map(|keys| keys.column.as_str())
    }

    /// Comma-separated select list, aliasing columns whose name differs
    /// from the property. Map-like types are never aliased.
    ///
    /// `user_name` mapped from `userName` selects as `user_name AS userName`;
    /// `` `DESC` `` mapped from `desc` needs no alias.
    pub fn select_columns(&self) -> &str {
        memoize(&self.select_columns, || {
            let alias = self.kind != TypeKind::Map;
            join(self.columns.iter().map(|c| {
                if alias && c.needs_alias() {
                    format!("{} AS {}", c.column, c.property)
                } else {
                    c.column.to_string()
                }
            }), ",")
        })
    }

    /// Comma-separated column names, never aliased.
    pub fn all_columns(&self) -> &str {
        memoize(&self.all_columns, || {
            join(self.columns.iter().map(|c| c.column.to_string()), ",")
        })
    }

    /// `col = ?` for each primary-key column, joined by ` AND `.
    pub fn primary_key_where(&self) -> &str {
        memoize(&self.primary_key_where, || {
            join(
                self.primary_key_columns().map(|c| format!("{} = ?", c.column)),
                " AND ",
            )
        })
    }

    /// `col DIR` for each column with a declared order, or empty.
    pub fn order_by_clause(&self) -> &str {
        memoize(&self.order_by_clause, || {
            join(
                self.columns
                    .iter()
                    .filter_map(|c| c.order_by.map(|dir| format!("{} {dir}", c.column))),
                ",",
            )
        })
    }
}

fn memoize(cell: &OnceLock<String>, compute: impl FnOnce() -> String) -> &str {
    if let Some(value) = cell.get() {
        return value;
    }
    let value = compute();
    cell.get_or_init(|| value)
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

/// Accumulates columns for a table, deduplicating by column identity.
#[derive(Debug)]
pub(crate) struct TableBuilder {
    entity: &'static str,
    name: CompactString,
    kind: TypeKind,
    columns: Vec<ColumnDescriptor>,
    seen: HashSet<ColumnDescriptor>,
    primary_key: SmallVec<[usize; 2]>,
    generated_keys: Option<GeneratedKeys>,
}

impl TableBuilder {
    pub(crate) fn new(entity: &'static str, name: impl Into<CompactString>, kind: TypeKind) -> Self {
        Self {
            entity,
            name: name.into(),
            kind,
            columns: Vec::new(),
            seen: HashSet::new(),
            primary_key: SmallVec::new(),
            generated_keys: None,
        }
    }

    /// Add a column. Returns `false` when a column with the same name is
    /// already present; the first one is kept.
    pub(crate) fn push(&mut self, column: ColumnDescriptor) -> bool {
        if !self.seen.insert(column.clone()) {
            return false;
        }
        if column.primary_key {
            self.primary_key.push(self.columns.len());
        }
        self.columns.push(column);
        true
    }

    /// Record the driver-returned key column. Returns the previous one.
    pub(crate) fn set_generated_keys(&mut self, keys: GeneratedKeys) -> Option<GeneratedKeys> {
        self.generated_keys.replace(keys)
    }

    pub(crate) fn build(mut self) -> TableDescriptor {
        if self.primary_key.is_empty() {
            self.primary_key = (0..self.columns.len()).collect();
        }
        TableDescriptor {
            entity: self.entity,
            name: self.name,
            kind: self.kind,
            columns: self.columns,
            primary_key: self.primary_key,
            generated_keys: self.generated_keys,
            select_columns: OnceLock::new(),
            all_columns: OnceLock::new(),
            primary_key_where: OnceLock::new(),
            order_by_clause: OnceLock::new(),
        }
    }
}
