//! Tracing utilities for metadata resolution observability.
//!
//! Enable the `tracing` feature to emit spans and events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event when a type's mapping is resolved for the first time.
///
/// ```ignore
/// entable_trace_resolve!(decl.name, &table.name, table.columns().len());
/// ```
#[macro_export]
macro_rules! entable_trace_resolve {
    ($type_name:expr, $table:expr, $columns:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            entity = $type_name,
            table = %$table,
            columns = $columns,
            "entable.resolve"
        );
    };
}

/// Emit a trace-level event for a registry cache hit.
#[macro_export]
macro_rules! entable_trace_cache_hit {
    ($type_name:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(entity = $type_name, "entable.cache_hit");
    };
}

/// Emit a warn-level event with a static message and the offending type.
///
/// ```ignore
/// entable_trace_warn!(decl.name, "multiple JDBC identity columns, last one wins");
/// ```
#[macro_export]
macro_rules! entable_trace_warn {
    ($type_name:expr, $message:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(entity = $type_name, $message);
    };
}

/// Emit an error-level event when resolution of a type fails.
#[macro_export]
macro_rules! entable_trace_failure {
    ($type_name:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(entity = $type_name, error = %$error, "entable.resolve_failed");
    };
}
