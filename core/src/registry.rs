//! Registry of resolved table mappings, keyed by record type.

use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use hashbrown::HashMap;

use crate::config::MapperConfig;
use crate::decl::Entity;
use crate::error::{EntableError, Result};
use crate::naming::NamingStyle;
use crate::resolver::resolve_table;
use crate::statement::StatementBuilder;
use crate::table::{GeneratedKeys, TableDescriptor};

/// Counters describing registry activity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegistryStats {
    pub hits: usize,
    pub misses: usize,
    /// Resolution bodies that completed successfully
    pub resolutions: usize,
    pub size: usize,
}

/// Resolved table mappings for the lifetime of the registry.
///
/// Entries are added on first resolution of a type and never replaced or
/// evicted. Resolution of a given type runs at most once: concurrent first
/// callers for the same type wait for the first one and share its result.
/// Different types resolve under separate locks.
///
/// ```
/// use entable_core::{Entity, EntityRegistry, FieldDecl, MapperConfig, TypeDecl, ValueType};
///
/// struct Tag;
///
/// impl Entity for Tag {
///     fn declaration() -> &'static TypeDecl {
///         static DECL: TypeDecl = TypeDecl::new(
///             "Tag",
///             &[
///                 FieldDecl::new("id", ValueType::Integer).id(),
///                 FieldDecl::new("label", ValueType::Text),
///             ],
///         );
///         &DECL
///     }
/// }
///
/// let registry = EntityRegistry::new(MapperConfig::default());
/// let table = registry.resolve::<Tag>().unwrap();
/// assert_eq!(table.select_columns(), "id,label");
/// assert!(std::sync::Arc::ptr_eq(&table, &registry.table::<Tag>().unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct EntityRegistry {
    config: MapperConfig,
    tables: RwLock<HashMap<TypeId, Arc<TableDescriptor>>>,
    // One lock per type, held while that type resolves.
    pending: Mutex<HashMap<TypeId, Arc<Mutex<()>>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    resolutions: AtomicUsize,
}

impl EntityRegistry {
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Resolve `T` with the configured default naming style.
    pub fn resolve<T: Entity>(&self) -> Result<Arc<TableDescriptor>> {
        self.resolve_with_style::<T>(self.config.style)
    }

    /// Resolve `T`, using `style` unless the type declares its own.
    ///
    /// The style only matters for the first resolution; later calls return
    /// the cached mapping whatever style they pass.
    pub fn resolve_with_style<T: Entity>(&self, style: NamingStyle) -> Result<Arc<TableDescriptor>> {
        let key = TypeId::of::<T>();
        let decl = T::declaration();

        if let Some(table) = self.lookup(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            crate::entable_trace_cache_hit!(decl.name);
            return Ok(table);
        }

        let slot = self.slot(key);
        let _guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished while this one waited.
        if let Some(table) = self.lookup(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            crate::entable_trace_cache_hit!(decl.name);
            return Ok(table);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let table = match resolve_table(decl, style) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                crate::entable_trace_failure!(decl.name, err);
                return Err(err);
            }
        };

        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&table));
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        crate::entable_trace_resolve!(decl.name, table.name(), table.columns().len());

        Ok(table)
    }

    /// The resolved mapping for `T`.
    ///
    /// Never resolves implicitly: a type that has not been through
    /// [`resolve`](Self::resolve) is an [`EntableError::UnresolvedType`].
    pub fn table<T: Entity>(&self) -> Result<Arc<TableDescriptor>> {
        self.lookup(TypeId::of::<T>())
            .ok_or(EntableError::UnresolvedType(T::declaration().name))
    }

    pub fn is_resolved<T: Entity>(&self) -> bool {
        self.lookup(TypeId::of::<T>()).is_some()
    }

    /// Property/column receiving the driver-returned key after insert, if `T`
    /// declares one.
    pub fn generated_keys<T: Entity>(&self) -> Result<Option<GeneratedKeys>> {
        Ok(self.table::<T>()?.generated_keys().cloned())
    }

    /// Statement builders for a resolved `T`.
    pub fn statements<T: Entity>(&self) -> Result<StatementBuilder<'_>> {
        Ok(StatementBuilder::new(self.table::<T>()?, &self.config))
    }

    /// Best-effort counters; relaxed atomics, not a consistent snapshot.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            resolutions: self.resolutions.load(Ordering::Relaxed),
            size: self
                .tables
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }

    fn lookup(&self, key: TypeId) -> Option<Arc<TableDescriptor>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn slot(&self, key: TypeId) -> Arc<Mutex<()>> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(pending.entry(key).or_default())
    }
}
