//! Body formats the REST layer can accept.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Wire format enabled for request bodies.
///
/// The string form is the format segment expected after `+` in a
/// `Content-Type` header, so `InputFormat::Yaml` handles
/// `application/vnd.folio.SectionInput+yaml`.
#[derive(
    Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, EnumIter, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InputFormat {
    /// JSON documents.
    Json,
    /// YAML documents.
    Yaml,
}

impl InputFormat {
    /// Returns the content-type format segment for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Error returned when text does not name an [`InputFormat`].
pub type InputFormatParseError = strum::ParseError;
