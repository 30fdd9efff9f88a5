//! Section endpoints of the REST layer.
//!
//! The controller turns a transport request into a [`Message`], lets the
//! input dispatcher produce a typed [`RestInput`], and hands the result to the
//! [`SectionService`]. Failures come back as [`RestError`] values that carry
//! their HTTP status.

mod errors;

use folio_input::{CONTENT_TYPE_HEADER, ContentType, InputDispatcher, MediaParserRegistry, Message};
use tracing::{debug, warn};

use crate::input::RestInput;
use crate::service::SectionService;
use crate::values::{Section, SectionList};

pub use self::errors::RestError;

const CONTROLLER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::controller");

/// Input dispatcher configured for REST inputs.
pub type RestInputDispatcher = InputDispatcher<MediaParserRegistry<RestInput>>;

/// Transport-neutral view of an inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Request {
    /// Creates a request with an optional content type.
    #[must_use]
    pub fn new(content_type: Option<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type,
            body: body.into(),
        }
    }

    /// Creates a request carrying a content type.
    #[must_use]
    pub fn with_content_type(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Some(content_type.into()), body)
    }

    /// Returns the content type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    fn into_message(self) -> Message {
        let headers = self
            .content_type
            .map(|value| (CONTENT_TYPE_HEADER, value));
        Message::new(headers, self.body)
    }
}

fn media_of(message: &Message) -> String {
    message
        .content_type()
        .and_then(|value| ContentType::parse(value).ok())
        .map_or_else(String::new, |content_type| content_type.media().to_owned())
}

/// Handles section listing and creation.
#[derive(Debug)]
pub struct SectionController<S> {
    dispatcher: RestInputDispatcher,
    service: S,
    max_body_bytes: u64,
}

impl<S: SectionService> SectionController<S> {
    /// Creates a controller.
    #[must_use]
    pub const fn new(dispatcher: RestInputDispatcher, service: S, max_body_bytes: u64) -> Self {
        Self {
            dispatcher,
            service,
            max_body_bytes,
        }
    }

    /// Returns the section service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Returns the input dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &RestInputDispatcher {
        &self.dispatcher
    }

    /// Lists every section.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Service`] when the service cannot load sections.
    pub fn list_sections(&self) -> Result<SectionList, RestError> {
        let sections = self.service.load_sections()?;
        debug!(
            target: CONTROLLER_TARGET,
            count = sections.len(),
            "listing sections"
        );
        Ok(SectionList::new(sections))
    }

    /// Decodes the request without acting on it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::PayloadTooLarge`] for oversized bodies and
    /// [`RestError::Input`] when dispatch fails.
    pub fn parse_input(&self, request: Request) -> Result<RestInput, RestError> {
        let message = self.accept(request)?;
        self.dispatch(&message)
    }

    /// Creates a section from a section-create payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::PayloadTooLarge`] for oversized bodies,
    /// [`RestError::Input`] when dispatch fails,
    /// [`RestError::UnexpectedInput`] when the payload is not a section
    /// create, and [`RestError::Service`] when the service fails.
    pub fn create_section(&self, request: Request) -> Result<Section, RestError> {
        let message = self.accept(request)?;
        match self.dispatch(&message)? {
            RestInput::SectionCreate(create) => {
                let section = self.service.create_section(create)?;
                debug!(
                    target: CONTROLLER_TARGET,
                    id = section.id,
                    identifier = %section.identifier,
                    "section created"
                );
                Ok(section)
            }
            other => {
                warn!(
                    target: CONTROLLER_TARGET,
                    received = other.kind(),
                    "unexpected input for section creation"
                );
                Err(RestError::UnexpectedInput {
                    media: media_of(&message),
                    expected: "section_create",
                })
            }
        }
    }

    /// Checks the body limit and moves the request into a message.
    fn accept(&self, request: Request) -> Result<Message, RestError> {
        let size = u64::try_from(request.body().len()).unwrap_or(u64::MAX);
        if size > self.max_body_bytes {
            return Err(RestError::PayloadTooLarge {
                size,
                max_size: self.max_body_bytes,
            });
        }
        Ok(request.into_message())
    }

    fn dispatch(&self, message: &Message) -> Result<RestInput, RestError> {
        self.dispatcher.dispatch(message).map_err(|error| {
            warn!(
                target: CONTROLLER_TARGET,
                content_type = message.content_type().unwrap_or_default(),
                %error,
                "rejected request input"
            );
            RestError::from(error)
        })
    }
}

#[cfg(test)]
mod tests;
