use serde::{Deserialize, Serialize};

/// Sort order for a query clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Field a sort clause orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortTarget {
    /// The materialised location path.
    LocationPathString,
    /// The location depth.
    LocationDepth,
}

/// Ordering criterion for a location query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortClause {
    /// Field to order by.
    pub target: SortTarget,
    /// Sort order.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortClause {
    /// Creates a clause for an arbitrary target.
    #[must_use]
    pub const fn new(target: SortTarget, direction: SortDirection) -> Self {
        Self { target, direction }
    }

    /// Orders by location path string.
    #[must_use]
    pub const fn location_path_string(direction: SortDirection) -> Self {
        Self::new(SortTarget::LocationPathString, direction)
    }

    /// Orders by location depth.
    #[must_use]
    pub const fn location_depth(direction: SortDirection) -> Self {
        Self::new(SortTarget::LocationDepth, direction)
    }
}
