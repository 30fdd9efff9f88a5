//! Error types for section controller failures.

use folio_input::{InputError, InputErrorKind};
use thiserror::Error;

use crate::service::ServiceError;

/// Errors surfaced by the section controller.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request body could not be turned into a typed input.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The request body exceeds the configured limit.
    #[error("request body too large: {size} bytes exceeds {max_size} byte limit")]
    PayloadTooLarge {
        /// Body length in bytes.
        size: u64,
        /// Configured limit in bytes.
        max_size: u64,
    },

    /// The body parsed, but as a different kind of input than the endpoint
    /// accepts.
    #[error("media type '{media}' is not accepted here, expected {expected} input")]
    UnexpectedInput {
        /// Media segment of the request content type.
        media: String,
        /// Input kind the endpoint accepts.
        expected: &'static str,
    },

    /// The section service rejected the operation.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl RestError {
    /// Returns the HTTP status code a transport should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Input(error) => match error.kind() {
                InputErrorKind::UnsupportedFormat | InputErrorKind::UnknownMediaType => 415,
                InputErrorKind::MissingContentType
                | InputErrorKind::MalformedContentType
                | InputErrorKind::BodyDecode
                | InputErrorKind::InvalidPayload => 400,
            },
            Self::UnexpectedInput { .. } => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::Service(_) => 500,
        }
    }

    /// Returns `true` when the caller sent a request that cannot succeed as
    /// is.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        let status = self.status_code();
        status >= 400 && status < 500
    }
}
