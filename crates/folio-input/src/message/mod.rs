//! Inbound messages and content type parsing.
//!
//! A [`Message`] is the transport-neutral view of a request: headers plus a
//! raw body. The dispatcher reads its `Content-Type` header and splits it into
//! a [`ContentType`] of media and format.

use std::collections::HashMap;

use crate::error::InputError;

/// Header naming the media and format of a message body.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Immutable request input handed to the dispatcher.
///
/// Header names are stored exactly as received; lookups are case-sensitive.
///
/// # Example
///
/// ```
/// use folio_input::Message;
///
/// let message = Message::new([("Content-Type", "section+json")], "{}");
/// assert_eq!(message.content_type(), Some("section+json"));
/// assert_eq!(message.body(), b"{}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Message {
    /// Creates a message from headers and a body.
    pub fn new<I, K, V>(headers: I, body: impl Into<Vec<u8>>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            body: body.into(),
        }
    }

    /// Creates a message carrying only a `Content-Type` header.
    pub fn with_content_type(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        let value: String = content_type.into();
        Self::new([(CONTENT_TYPE_HEADER, value)], body)
    }

    /// Creates a message without any headers.
    pub fn without_headers(body: impl Into<Vec<u8>>) -> Self {
        Self {
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Returns all headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the value of the named header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the `Content-Type` header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE_HEADER)
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A `Content-Type` value split into media and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType<'a> {
    media: &'a str,
    format: &'a str,
}

impl<'a> ContentType<'a> {
    /// Parses a `<media>+<format>` header value.
    ///
    /// The whole value must contain exactly one `+`, parameters included.
    /// Parameters after a `;` may only follow the format and are discarded;
    /// surrounding whitespace is trimmed from both segments, which must then
    /// be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedContentType`] carrying the original
    /// header value when the value has zero or several `+`, an empty segment,
    /// or parameters on the media segment.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_input::ContentType;
    ///
    /// let parsed = ContentType::parse("application/vnd.folio.SectionInput+json")
    ///     .expect("well-formed");
    /// assert_eq!(parsed.media(), "application/vnd.folio.SectionInput");
    /// assert_eq!(parsed.format(), "json");
    /// assert!(ContentType::parse("a+b+c").is_err());
    /// assert!(ContentType::parse("section+json; profile=a+b").is_err());
    /// ```
    pub fn parse(value: &'a str) -> Result<Self, InputError> {
        let mut parts = value.split('+');
        let (Some(raw_media), Some(raw_format), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(InputError::malformed_content_type(value));
        };

        let media = raw_media.trim();
        let format = raw_format
            .split_once(';')
            .map_or(raw_format, |(head, _)| head)
            .trim();
        if media.is_empty() || media.contains(';') || format.is_empty() {
            return Err(InputError::malformed_content_type(value));
        }
        Ok(Self { media, format })
    }

    /// Returns the media segment, which selects the parser.
    #[must_use]
    pub const fn media(&self) -> &'a str {
        self.media
    }

    /// Returns the format segment, which selects the converter.
    #[must_use]
    pub const fn format(&self) -> &'a str {
        self.format
    }
}
