//! Error types for the command-line front end.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::controller::RestError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {source}")]
    LoadConfiguration { source: Arc<ortho_config::OrthoError> },
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("failed to read request body from '{path}': {source}")]
    ReadFile { path: Utf8PathBuf, source: io::Error },
    #[error("failed to read request body from stdin: {0}")]
    ReadStdin(io::Error),
    #[error("request rejected with status {status}: {source}", status = .source.status_code())]
    Rest {
        #[source]
        source: RestError,
    },
    #[error("failed to serialise output: {0}")]
    Serialise(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    /// Returns the process exit status for this error.
    ///
    /// Requests rejected as client errors return 1. Everything else returns
    /// 2.
    pub(crate) const fn exit_status(&self) -> u8 {
        match self {
            Self::Rest { source } if source.is_client_error() => 1,
            _ => 2,
        }
    }
}

impl From<RestError> for AppError {
    fn from(source: RestError) -> Self {
        Self::Rest { source }
    }
}
