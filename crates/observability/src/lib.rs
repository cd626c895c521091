//! Tracing/logging setup shared by every stockroom binary.

/// Initialize process-wide tracing with an explicit output format.
///
/// Returns `true` if this call installed the global subscriber; later calls
/// are no-ops and return `false`.
pub fn init_with(format: LogFormat) -> bool {
    tracing::init(format)
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogFormat, ParseLogFormatError};
