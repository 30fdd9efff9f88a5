//! Media-keyed parsing of generic payloads into typed values.
//!
//! The [`ParsingDispatcher`] trait is the seam the input dispatcher calls
//! after format conversion. [`MediaParserRegistry`] is the stock
//! implementation: a map from media identifier to a [`MediaParser`], with
//! last-write-wins registration.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

/// Second-stage dispatcher selecting a parser by media type.
pub trait ParsingDispatcher {
    /// Typed value produced for every media type this dispatcher knows.
    type Output;

    /// Parses a generic payload for the given media type.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownMediaType`] when no parser handles
    /// `media`, or the selected parser's structural validation failure.
    fn parse(&self, payload: Value, media: &str) -> Result<Self::Output, ParseError>;
}

/// Parser for a single media type.
///
/// Closures of the shape `Fn(Value, &str) -> Result<T, ParseError>` implement
/// this trait directly.
pub trait MediaParser<T>: Send + Sync {
    /// Parses the payload registered under `media`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPayload`] when the payload does not match
    /// the expected structure.
    fn parse(&self, payload: Value, media: &str) -> Result<T, ParseError>;
}

impl<T, F> MediaParser<T> for F
where
    F: Fn(Value, &str) -> Result<T, ParseError> + Send + Sync,
{
    fn parse(&self, payload: Value, media: &str) -> Result<T, ParseError> {
        self(payload, media)
    }
}

/// Parser deserialising the payload into `U` and mapping it into `T`.
///
/// The payload must be an object. serde would otherwise fill a struct from
/// a sequence by position, so `["Media"]` would pass for `{"name": "Media"}`.
///
/// # Example
///
/// ```
/// use folio_input::{DeserializeParser, MediaParser};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Rename {
///     name: String,
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Rename(Rename),
/// }
///
/// let parser = DeserializeParser::new(Input::Rename);
/// let parsed = parser
///     .parse(json!({"name": "Media"}), "rename")
///     .expect("valid payload");
/// assert_eq!(parsed, Input::Rename(Rename { name: "Media".into() }));
/// ```
pub struct DeserializeParser<U, T> {
    map: fn(U) -> T,
}

impl<U, T> DeserializeParser<U, T> {
    /// Creates a parser applying `map` to the deserialised payload.
    #[must_use]
    pub const fn new(map: fn(U) -> T) -> Self {
        Self { map }
    }
}

impl<U, T> fmt::Debug for DeserializeParser<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializeParser")
            .field("target", &std::any::type_name::<U>())
            .finish()
    }
}

impl<U, T> MediaParser<T> for DeserializeParser<U, T>
where
    U: DeserializeOwned,
{
    fn parse(&self, payload: Value, media: &str) -> Result<T, ParseError> {
        if !payload.is_object() {
            return Err(ParseError::invalid_payload(
                media,
                format!("expected an object, found {}", json_kind(&payload)),
            ));
        }
        serde_json::from_value(payload)
            .map(self.map)
            .map_err(|source| ParseError::from_json_error(media, source))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Registry of media parsers producing values of type `T`.
///
/// # Example
///
/// ```
/// use folio_input::{MediaParserRegistry, ParseError, ParsingDispatcher};
/// use serde_json::{Value, json};
///
/// let mut registry = MediaParserRegistry::new();
/// registry.register("echo", |payload: Value, _media: &str| Ok::<_, ParseError>(payload));
///
/// assert_eq!(registry.parse(json!(1), "echo").expect("known media"), json!(1));
/// assert!(registry.parse(json!(1), "other").is_err());
/// ```
pub struct MediaParserRegistry<T> {
    parsers: HashMap<String, Box<dyn MediaParser<T>>>,
}

impl<T> MediaParserRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers the parser for a media type, replacing any previous one.
    pub fn register(&mut self, media: impl Into<String>, parser: impl MediaParser<T> + 'static) {
        self.parsers.insert(media.into(), Box::new(parser));
    }

    /// Looks up the parser for a media type.
    #[must_use]
    pub fn get(&self, media: &str) -> Option<&dyn MediaParser<T>> {
        self.parsers.get(media).map(|parser| parser.as_ref())
    }

    /// Returns `true` when a parser is registered for the media type.
    #[must_use]
    pub fn contains(&self, media: &str) -> bool {
        self.parsers.contains_key(media)
    }

    /// Returns the registered media types in lexical order.
    #[must_use]
    pub fn media_types(&self) -> Vec<&str> {
        let mut media: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        media.sort_unstable();
        media
    }

    /// Returns the number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns `true` when no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl<T> Default for MediaParserRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MediaParserRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaParserRegistry")
            .field("media_types", &self.media_types())
            .finish()
    }
}

impl<T> ParsingDispatcher for MediaParserRegistry<T> {
    type Output = T;

    fn parse(&self, payload: Value, media: &str) -> Result<T, ParseError> {
        let parser = self
            .get(media)
            .ok_or_else(|| ParseError::unknown_media_type(media))?;
        parser.parse(payload, media)
    }
}
