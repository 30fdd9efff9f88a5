//! Errors raised while dispatching request input.
//!
//! Each stage of the pipeline has its own error type: [`ConvertError`] for
//! format converters, [`ParseError`] for media parsers, and [`InputError`]
//! for the dispatcher itself. Every variant keeps the offending header value,
//! format, or media so callers can build a diagnostic without extra context.

use thiserror::Error;

/// Errors surfaced by [`InputDispatcher::dispatch`](crate::InputDispatcher::dispatch).
#[derive(Debug, Error)]
pub enum InputError {
    /// The message carried no `Content-Type` header.
    #[error("missing Content-Type header in message")]
    MissingContentType,

    /// The `Content-Type` header is not of the form `<media>+<format>`.
    #[error("no format specification in content type '{value}': expected '<media>+<format>'")]
    MalformedContentType {
        /// Header value as received.
        value: String,
    },

    /// No converter is registered for the requested format.
    #[error("unknown format specification '{format}'")]
    UnsupportedFormat {
        /// Format segment of the content type.
        format: String,
    },

    /// The converter for the requested format rejected the body.
    #[error("failed to decode {format} body: {source}")]
    BodyDecode {
        /// Format whose converter failed.
        format: String,
        /// Converter failure.
        #[source]
        source: ConvertError,
    },

    /// The parsing dispatcher rejected the decoded payload.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Discriminant of an [`InputError`], flattened across the parse stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputErrorKind {
    /// See [`InputError::MissingContentType`].
    MissingContentType,
    /// See [`InputError::MalformedContentType`].
    MalformedContentType,
    /// See [`InputError::UnsupportedFormat`].
    UnsupportedFormat,
    /// See [`InputError::BodyDecode`].
    BodyDecode,
    /// See [`ParseError::UnknownMediaType`].
    UnknownMediaType,
    /// See [`ParseError::InvalidPayload`].
    InvalidPayload,
}

impl InputError {
    /// Creates a malformed content type error for the given header value.
    pub fn malformed_content_type(value: impl Into<String>) -> Self {
        Self::MalformedContentType {
            value: value.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates a body decode error for the given format.
    pub fn body_decode(format: impl Into<String>, source: ConvertError) -> Self {
        Self::BodyDecode {
            format: format.into(),
            source,
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> InputErrorKind {
        match self {
            Self::MissingContentType => InputErrorKind::MissingContentType,
            Self::MalformedContentType { .. } => InputErrorKind::MalformedContentType,
            Self::UnsupportedFormat { .. } => InputErrorKind::UnsupportedFormat,
            Self::BodyDecode { .. } => InputErrorKind::BodyDecode,
            Self::Parse(ParseError::UnknownMediaType { .. }) => InputErrorKind::UnknownMediaType,
            Self::Parse(ParseError::InvalidPayload { .. }) => InputErrorKind::InvalidPayload,
        }
    }
}

/// Errors raised by a [`FormatConverter`](crate::FormatConverter).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The body is not valid UTF-8 text.
    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[source] std::str::Utf8Error),

    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The body is not valid YAML.
    #[error("invalid YAML: {message}")]
    Yaml {
        /// Parser diagnostic.
        message: String,
    },

    /// The decoded envelope holds no root element.
    #[error("{format} body has no root element")]
    EmptyRoot {
        /// Format being decoded.
        format: String,
    },
}

/// Errors raised by a [`ParsingDispatcher`](crate::ParsingDispatcher).
#[derive(Debug, Error)]
pub enum ParseError {
    /// No parser is registered for the media type.
    #[error("unknown media type '{media}'")]
    UnknownMediaType {
        /// Media segment of the content type.
        media: String,
    },

    /// The payload does not have the structure the parser expects.
    #[error("invalid payload for media type '{media}': {message}")]
    InvalidPayload {
        /// Media type whose parser failed.
        media: String,
        /// Human-readable description of the mismatch.
        message: String,
        /// Optional underlying deserialisation error.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl ParseError {
    /// Creates an unknown media type error.
    pub fn unknown_media_type(media: impl Into<String>) -> Self {
        Self::UnknownMediaType {
            media: media.into(),
        }
    }

    /// Creates an invalid payload error without an underlying source.
    pub fn invalid_payload(media: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            media: media.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates an invalid payload error from a deserialisation failure.
    pub fn from_json_error(media: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidPayload {
            media: media.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }
}
