//! REST section endpoints built on content-type driven input dispatch.
//!
//! The crate wires [`folio_input`] into a section controller: configuration
//! picks the enabled body formats, [`input::rest_input_parsers`] maps media
//! types to typed [`input::RestInput`] values, and the
//! [`controller::SectionController`] forwards section-create payloads to a
//! [`service::SectionService`].

pub mod bootstrap;
pub mod cli;
pub mod controller;
pub mod input;
pub mod service;
pub mod telemetry;
pub mod values;

#[cfg(test)]
mod tests;

pub use bootstrap::{BootstrapError, bootstrap_with, input_dispatcher_for};
pub use controller::{Request, RestError, RestInputDispatcher, SectionController};
pub use input::{RestInput, rest_input_parsers};
pub use service::{InMemorySectionService, SectionService, ServiceError};
