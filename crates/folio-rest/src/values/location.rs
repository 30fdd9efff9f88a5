use serde::{Deserialize, Serialize};

use super::sort::{SortClause, SortDirection, SortTarget};

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Materialised path of ancestor ids, e.g. `/1/2/42/`.
    pub path_string: String,
    /// Distance from the tree root.
    pub depth: u32,
}

/// One page of a location query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationList {
    /// Total number of matches, which may exceed `locations.len()`.
    pub total_count: usize,
    /// The locations on this page.
    pub locations: Vec<Location>,
}

impl LocationList {
    /// Creates a page with the given total hit count.
    #[must_use]
    pub const fn new(total_count: usize, locations: Vec<Location>) -> Self {
        Self {
            total_count,
            locations,
        }
    }

    /// Orders the page by the clause. Equal keys keep their relative order.
    pub fn sort_by(&mut self, clause: &SortClause) {
        self.locations.sort_by(|left, right| {
            let ordering = match clause.target {
                SortTarget::LocationPathString => left.path_string.cmp(&right.path_string),
                SortTarget::LocationDepth => left.depth.cmp(&right.depth),
            };
            match clause.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}
