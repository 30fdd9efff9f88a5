//! YAML converter backed by `serde-saphyr`.

use serde_json::Value;

use super::{Document, Envelope, FormatConverter};
use crate::error::ConvertError;

/// Format identifier conventionally used for YAML bodies.
pub const YAML_FORMAT: &str = "yaml";

/// Converts YAML bodies into documents.
///
/// The YAML tree is decoded straight into a [`serde_json::Value`], so parsers
/// see the same generic structure regardless of the wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConverter {
    envelope: Envelope,
}

impl YamlConverter {
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

impl FormatConverter for YamlConverter {
    fn convert(&self, body: &[u8]) -> Result<Document, ConvertError> {
        let text = std::str::from_utf8(body).map_err(ConvertError::Utf8)?;
        let decoded: Value = serde_saphyr::from_str(text).map_err(|error| ConvertError::Yaml {
            message: error.to_string(),
        })?;
        self.envelope.open(YAML_FORMAT, decoded)
    }
}
