//! Tracing utilities for record loading.
//!
//! The macros expand in the calling crate and emit events via the `tracing`
//! crate when that crate's `tracing` feature is enabled.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the id-scan SQL text and parameter count.
///
/// ```ignore
/// recordlist_trace_query!(statement.sql(), statement.params().len());
/// ```
#[macro_export]
macro_rules! recordlist_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, params = $param_count, "recordlist.query");
    };
}

/// Emit a debug-level tracing event once a load has finished.
#[macro_export]
macro_rules! recordlist_trace_load {
    ($table:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, records = $count, "recordlist.load");
    };
}

/// Emit a warn-level tracing event for an id that could not be hydrated and was skipped.
#[macro_export]
macro_rules! recordlist_trace_skip {
    ($table:expr, $id:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(table = %$table, id = %$id, "recordlist.hydrate.skipped");
    };
}

/// Emit a warn-level tracing event for a failed load.
#[macro_export]
macro_rules! recordlist_trace_error {
    ($sql:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(sql = %$sql, error = %$err, "recordlist.load.failed");
    };
}
