//! Layered configuration for the Folio REST layer.
//!
//! [`Config`] resolves values from built-in defaults, a TOML file named by
//! `--config-path` or `FOLIO_CONFIG_PATH`, `FOLIO_*` environment variables,
//! and command-line flags, with later sources taking precedence.

mod defaults;
mod format;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_INPUT_FORMATS, DEFAULT_LOG_FILTER, DEFAULT_MAX_BODY_BYTES, default_log_filter,
    default_log_filter_string, default_log_format, default_max_body_bytes,
};
pub use format::{InputFormat, InputFormatParseError};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration shared by the binary and the REST bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FOLIO")]
pub struct Config {
    /// Tracing filter expression, e.g. `info` or `folio-input=debug`.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log events.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Body formats that get a converter. `None` enables the defaults.
    #[serde(default)]
    pub input_formats: Option<Vec<InputFormat>>,
    /// Largest request body accepted, in bytes.
    #[serde(default = "default_max_body_bytes")]
    #[ortho_config(default = default_max_body_bytes())]
    pub max_body_bytes: u64,
    /// Whether bodies carry a single named root around the payload, as in
    /// `{"SectionInput": {"name": "Products"}}`. `None` means bare bodies.
    ///
    /// Not exposed on the command line; set it in the file or with
    /// `FOLIO_ENVELOPED_BODIES`.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub enveloped_bodies: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            input_formats: None,
            max_body_bytes: default_max_body_bytes(),
            enveloped_bodies: None,
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the configured log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the enabled body formats without duplicates, in configured
    /// order.
    #[must_use]
    pub fn input_formats(&self) -> Vec<InputFormat> {
        let configured = self
            .input_formats
            .as_deref()
            .unwrap_or(DEFAULT_INPUT_FORMATS);
        let mut formats = Vec::with_capacity(configured.len());
        for format in configured {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }

    /// Returns the body size limit in bytes.
    #[must_use]
    pub const fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes
    }

    /// Returns whether bodies are wrapped in a single named root.
    #[must_use]
    pub const fn enveloped_bodies(&self) -> bool {
        matches!(self.enveloped_bodies, Some(true))
    }
}
