//! Built-in configuration defaults.

use crate::format::InputFormat;
use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default request body limit in bytes.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Formats enabled when the configuration names none.
pub const DEFAULT_INPUT_FORMATS: &[InputFormat] = &[InputFormat::Json, InputFormat::Yaml];

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default request body limit in bytes.
#[must_use]
pub const fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}
