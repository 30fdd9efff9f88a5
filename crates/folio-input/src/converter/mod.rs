//! Format converters turning raw bodies into generic documents.
//!
//! A [`FormatConverter`] knows one wire format and nothing about the domain.
//! Its output is always a [`Document`] holding exactly one root element, so
//! the dispatcher can forward the root without caring whether the format has
//! an implicit envelope.

mod json;
mod yaml;

use serde_json::Value;

use crate::error::ConvertError;

pub use self::json::{JSON_FORMAT, JsonConverter};
pub use self::yaml::{YAML_FORMAT, YamlConverter};

/// Decodes a raw body of one wire format into a [`Document`].
///
/// Implementations must be shareable across request threads.
///
/// # Example
///
/// ```
/// use folio_input::{ConvertError, Document, FormatConverter};
/// use serde_json::Value;
///
/// struct PlainText;
///
/// impl FormatConverter for PlainText {
///     fn convert(&self, body: &[u8]) -> Result<Document, ConvertError> {
///         let text = std::str::from_utf8(body).map_err(ConvertError::Utf8)?;
///         Ok(Document::new(Value::String(text.to_owned())))
///     }
/// }
///
/// let document = PlainText.convert(b"hello").expect("utf-8 body");
/// assert_eq!(document.root(), &Value::String("hello".into()));
/// ```
pub trait FormatConverter: Send + Sync {
    /// Converts the body into a single-root document.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] when the body is not valid for the format.
    fn convert(&self, body: &[u8]) -> Result<Document, ConvertError>;
}

/// Generic decoded payload with exactly one root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wraps an already isolated root element.
    #[must_use]
    pub const fn new(root: Value) -> Self {
        Self { root }
    }

    /// Takes the first element of an outer container as the root.
    ///
    /// Objects yield their first member's value (insertion order) and arrays
    /// their first item. Remaining elements are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyRoot`] when the container is empty or is
    /// a scalar.
    pub fn from_outer(format: &str, outer: Value) -> Result<Self, ConvertError> {
        let root = match outer {
            Value::Object(members) => members.into_iter().next().map(|(_, value)| value),
            Value::Array(items) => items.into_iter().next(),
            _ => None,
        };
        root.map(Self::new).ok_or_else(|| ConvertError::EmptyRoot {
            format: format.to_owned(),
        })
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the document, returning the root element.
    #[must_use]
    pub fn into_root(self) -> Value {
        self.root
    }
}

/// How a converter locates the root element in a decoded body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Envelope {
    /// The decoded body is the root.
    #[default]
    Bare,
    /// The decoded body wraps the root, as in `{"SectionInput": {...}}`.
    Wrapped,
}

impl Envelope {
    /// Builds a document from a decoded body according to this envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyRoot`] for a wrapped body without a first
    /// element.
    pub fn open(self, format: &str, decoded: Value) -> Result<Document, ConvertError> {
        match self {
            Self::Bare => Ok(Document::new(decoded)),
            Self::Wrapped => Document::from_outer(format, decoded),
        }
    }
}
