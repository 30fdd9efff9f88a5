//! Two-stage input dispatch keyed by content type.
//!
//! The [`InputDispatcher`] resolves the format converter from the format
//! segment of the `Content-Type` header, decodes the body into a generic
//! document, and hands the document root to a [`ParsingDispatcher`] keyed by
//! the media segment.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::converter::FormatConverter;
use crate::error::InputError;
use crate::message::{ContentType, Message};
use crate::parsing::ParsingDispatcher;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Dispatches messages to a format converter and then to a media parser.
///
/// Converters are registered once during setup; dispatching only reads the
/// registry, so a configured dispatcher can be shared across threads behind
/// an [`Arc`].
///
/// # Example
///
/// ```
/// use folio_input::{
///     InputDispatcher, InputErrorKind, JsonConverter, MediaParserRegistry, Message, ParseError,
/// };
/// use serde_json::{Value, json};
///
/// let mut parsers = MediaParserRegistry::new();
/// parsers.register("echo", |payload: Value, _media: &str| Ok::<_, ParseError>(payload));
///
/// let mut dispatcher = InputDispatcher::new(parsers);
/// dispatcher.register("json", JsonConverter::new());
///
/// let ok = dispatcher
///     .dispatch(&Message::with_content_type("echo+json", "[1, 2]"))
///     .expect("dispatch succeeds");
/// assert_eq!(ok, json!([1, 2]));
///
/// let err = dispatcher
///     .dispatch(&Message::with_content_type("echo+xml", "<a/>"))
///     .expect_err("no xml converter");
/// assert_eq!(err.kind(), InputErrorKind::UnsupportedFormat);
/// ```
pub struct InputDispatcher<P> {
    converters: HashMap<String, Arc<dyn FormatConverter>>,
    parsing: P,
}

impl<P> InputDispatcher<P> {
    /// Creates a dispatcher with an empty converter registry.
    #[must_use]
    pub fn new(parsing: P) -> Self {
        Self {
            converters: HashMap::new(),
            parsing,
        }
    }

    /// Creates a dispatcher and registers the given converters in order.
    ///
    /// Later entries for the same format replace earlier ones.
    #[must_use]
    pub fn with_converters<I, K>(parsing: P, converters: I) -> Self
    where
        I: IntoIterator<Item = (K, Arc<dyn FormatConverter>)>,
        K: Into<String>,
    {
        let mut dispatcher = Self::new(parsing);
        for (format, converter) in converters {
            dispatcher.register_shared(format, converter);
        }
        dispatcher
    }

    /// Registers the converter for a format, replacing any previous one.
    pub fn register(
        &mut self,
        format: impl Into<String>,
        converter: impl FormatConverter + 'static,
    ) {
        self.register_shared(format, Arc::new(converter));
    }

    /// Registers an already shared converter for a format.
    pub fn register_shared(
        &mut self,
        format: impl Into<String>,
        converter: Arc<dyn FormatConverter>,
    ) {
        let key: String = format.into();
        debug!(target: DISPATCH_TARGET, format = %key, "registering format converter");
        self.converters.insert(key, converter);
    }

    /// Returns `true` when a converter is registered for the format.
    #[must_use]
    pub fn supports(&self, format: &str) -> bool {
        self.converters.contains_key(format)
    }

    /// Returns the registered formats in lexical order.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }

    /// Returns the parsing dispatcher.
    #[must_use]
    pub const fn parsing_dispatcher(&self) -> &P {
        &self.parsing
    }

    /// Returns a mutable reference to the parsing dispatcher.
    #[must_use]
    pub const fn parsing_dispatcher_mut(&mut self) -> &mut P {
        &mut self.parsing
    }
}

impl<P: ParsingDispatcher> InputDispatcher<P> {
    /// Decodes and parses a message into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingContentType`] when the header is absent,
    /// [`InputError::MalformedContentType`] when it is not `<media>+<format>`,
    /// [`InputError::UnsupportedFormat`] when no converter is registered for
    /// the format, [`InputError::BodyDecode`] when the converter rejects the
    /// body, and [`InputError::Parse`] with the parsing dispatcher's failure
    /// unchanged.
    pub fn dispatch(&self, message: &Message) -> Result<P::Output, InputError> {
        let header = message
            .content_type()
            .ok_or(InputError::MissingContentType)?;
        let content_type = ContentType::parse(header)?;
        let (media, format) = (content_type.media(), content_type.format());

        let converter = self
            .converters
            .get(format)
            .ok_or_else(|| InputError::unsupported_format(format))?;

        debug!(
            target: DISPATCH_TARGET,
            media,
            format,
            body_len = message.body().len(),
            "dispatching input"
        );

        let document = converter
            .convert(message.body())
            .map_err(|source| InputError::body_decode(format, source))?;

        self.parsing
            .parse(document.into_root(), media)
            .map_err(InputError::Parse)
    }
}

impl<P: fmt::Debug> fmt::Debug for InputDispatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("formats", &self.formats())
            .field("parsing", &self.parsing)
            .finish()
    }
}
