use serde::{Deserialize, Serialize};

/// A section groups content for permission and navigation purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Unique machine-readable identifier, e.g. `media`.
    pub identifier: String,
    /// Human-readable name.
    pub name: String,
}

/// Payload for creating a section.
///
/// A missing `identifier` is derived from `name` by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCreateStruct {
    /// Human-readable name.
    pub name: String,
    /// Requested identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl SectionCreateStruct {
    /// Creates a payload with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: None,
        }
    }
}

/// All sections known to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionList {
    /// Sections in service order.
    pub sections: Vec<Section>,
}

impl SectionList {
    /// Wraps the sections returned by a service.
    #[must_use]
    pub const fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}
