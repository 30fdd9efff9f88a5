//! Content-type driven input dispatch for the Folio REST layer.
//!
//! Request bodies arrive as raw bytes tagged with a `Content-Type` of the form
//! `<media>+<format>`, for example `application/vnd.folio.SectionInput+json`.
//! Decoding happens in two stages:
//!
//! 1. The **format** selects a [`FormatConverter`] which turns the bytes into a
//!    generic [`serde_json::Value`] tree wrapped in a single-root
//!    [`Document`].
//! 2. The **media** selects a parser through a [`ParsingDispatcher`], which
//!    turns the generic tree into a typed domain value.
//!
//! The [`InputDispatcher`] glues both stages together and owns the format
//! registry. Each dispatcher owns its registries, so tests and embedders can
//! build isolated instances freely.
//!
//! # Example
//!
//! ```
//! use folio_input::{
//!     DeserializeParser, InputDispatcher, JsonConverter, MediaParserRegistry, Message,
//! };
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct SectionCreate {
//!     name: String,
//! }
//!
//! let mut parsers = MediaParserRegistry::new();
//! parsers.register("section", DeserializeParser::new(|create: SectionCreate| create));
//!
//! let mut dispatcher = InputDispatcher::new(parsers);
//! dispatcher.register("json", JsonConverter::new());
//!
//! let message = Message::with_content_type("section+json", r#"{"name":"Products"}"#);
//! let value = dispatcher.dispatch(&message).expect("dispatch succeeds");
//! assert_eq!(value, SectionCreate { name: "Products".into() });
//! ```

pub mod converter;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod parsing;

#[cfg(test)]
mod tests;

pub use self::converter::{
    Document, Envelope, FormatConverter, JSON_FORMAT, JsonConverter, YAML_FORMAT, YamlConverter,
};
pub use self::dispatcher::InputDispatcher;
pub use self::error::{ConvertError, InputError, InputErrorKind, ParseError};
pub use self::message::{CONTENT_TYPE_HEADER, ContentType, Message};
pub use self::parsing::{DeserializeParser, MediaParser, MediaParserRegistry, ParsingDispatcher};
