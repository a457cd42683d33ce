//! Tracing and logging (shared setup).

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging with defaults (`info`, human-readable).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(LogFormat::default(), "info");
}

/// Initialize process-wide logging with an explicit format and default filter.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init_with(format: LogFormat, default_filter: &str) {
    tracing::init_with(format, default_filter);
}
