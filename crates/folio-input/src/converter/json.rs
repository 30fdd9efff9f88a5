//! JSON converter backed by `serde_json`.

use serde_json::Value;

use super::{Document, Envelope, FormatConverter};
use crate::error::ConvertError;

/// Format identifier conventionally used for JSON bodies.
pub const JSON_FORMAT: &str = "json";

/// Converts JSON bodies into documents.
///
/// # Example
///
/// ```
/// use folio_input::{Envelope, FormatConverter, JsonConverter};
/// use serde_json::json;
///
/// let bare = JsonConverter::new()
///     .convert(br#"{"name":"Media"}"#)
///     .expect("valid json");
/// assert_eq!(bare.root(), &json!({"name": "Media"}));
///
/// let wrapped = JsonConverter::with_envelope(Envelope::Wrapped)
///     .convert(br#"{"SectionInput":{"name":"Media"}}"#)
///     .expect("valid json");
/// assert_eq!(wrapped.root(), &json!({"name": "Media"}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter {
    envelope: Envelope,
}

impl JsonConverter {
    /// Creates a converter treating the whole body as the root.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_envelope(Envelope::Bare)
    }

    /// Creates a converter with the given envelope handling.
    #[must_use]
    pub const fn with_envelope(envelope: Envelope) -> Self {
        Self { envelope }
    }
}

impl FormatConverter for JsonConverter {
    fn convert(&self, body: &[u8]) -> Result<Document, ConvertError> {
        let decoded: Value = serde_json::from_slice(body).map_err(ConvertError::Json)?;
        self.envelope.open(JSON_FORMAT, decoded)
    }
}
