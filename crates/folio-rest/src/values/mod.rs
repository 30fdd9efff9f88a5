//! Repository value objects exchanged through the REST layer.

mod location;
mod section;
mod sort;

pub use self::location::{Location, LocationList};
pub use self::section::{Section, SectionCreateStruct, SectionList};
pub use self::sort::{SortClause, SortDirection, SortTarget};
