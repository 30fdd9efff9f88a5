//! Typed REST inputs and the media parsers that produce them.

use folio_input::{DeserializeParser, MediaParserRegistry};
use serde::Serialize;

use crate::values::{SectionCreateStruct, SortClause};

/// Media type of section creation payloads.
pub const SECTION_INPUT_MEDIA: &str = "application/vnd.folio.SectionInput";

/// Short alias accepted for [`SECTION_INPUT_MEDIA`].
pub const SECTION_MEDIA_ALIAS: &str = "section";

/// Media type of location sort clauses.
pub const SORT_CLAUSE_MEDIA: &str = "application/vnd.folio.SortClause";

/// Short alias accepted for [`SORT_CLAUSE_MEDIA`].
pub const SORT_MEDIA_ALIAS: &str = "sort";

/// Inputs the REST layer accepts, one variant per payload kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestInput {
    /// Payload for creating a section.
    SectionCreate(SectionCreateStruct),
    /// Ordering for a location listing.
    SortClause(SortClause),
}

impl RestInput {
    /// Returns a short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SectionCreate(_) => "section_create",
            Self::SortClause(_) => "sort_clause",
        }
    }
}

/// Builds the parser registry for every REST media type and alias.
#[must_use]
pub fn rest_input_parsers() -> MediaParserRegistry<RestInput> {
    let mut parsers = MediaParserRegistry::new();
    for media in [SECTION_INPUT_MEDIA, SECTION_MEDIA_ALIAS] {
        parsers.register(media, DeserializeParser::new(RestInput::SectionCreate));
    }
    for media in [SORT_CLAUSE_MEDIA, SORT_MEDIA_ALIAS] {
        parsers.register(media, DeserializeParser::new(RestInput::SortClause));
    }
    parsers
}
