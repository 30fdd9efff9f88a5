//! Section service seam.
//!
//! The controller depends only on [`SectionService`]. The repository behind
//! it lives outside this crate; [`InMemorySectionService`] stands in for it in
//! the binary and in tests.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::debug;

use crate::values::{Section, SectionCreateStruct};

const SERVICE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::service");

/// Errors reported by a section service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not complete the request.
    #[error("section service failure: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl ServiceError {
    /// Creates an internal failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Repository operations on sections used by the REST layer.
pub trait SectionService: Send + Sync {
    /// Returns every section.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the sections cannot be read.
    fn load_sections(&self) -> Result<Vec<Section>, ServiceError>;

    /// Creates a section and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the section cannot be stored.
    fn create_section(&self, create: SectionCreateStruct) -> Result<Section, ServiceError>;
}

/// Process-local section store with sequential ids starting at 1.
#[derive(Debug, Default)]
pub struct InMemorySectionService {
    sections: Mutex<Vec<Section>>,
}

impl InMemorySectionService {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Section>>, ServiceError> {
        self.sections
            .lock()
            .map_err(|_| ServiceError::internal("section store lock poisoned"))
    }
}

impl SectionService for InMemorySectionService {
    fn load_sections(&self) -> Result<Vec<Section>, ServiceError> {
        Ok(self.lock()?.clone())
    }

    fn create_section(&self, create: SectionCreateStruct) -> Result<Section, ServiceError> {
        let mut sections = self.lock()?;
        let id = sections.last().map_or(1, |last| last.id + 1);
        let identifier = create
            .identifier
            .unwrap_or_else(|| identifier_from_name(&create.name));
        let section = Section {
            id,
            identifier,
            name: create.name,
        };
        debug!(
            target: SERVICE_TARGET,
            id,
            identifier = %section.identifier,
            "section created"
        );
        sections.push(section.clone());
        Ok(section)
    }
}

/// Derives an identifier from a section name.
///
/// Letters are lowercased and each run of non-alphanumeric characters
/// becomes a single `_`.
#[must_use]
pub fn identifier_from_name(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len());
    let mut in_separator_run = false;
    for character in name.chars() {
        if character.is_alphanumeric() {
            identifier.extend(character.to_lowercase());
            in_separator_run = false;
        } else if !in_separator_run {
            identifier.push('_');
            in_separator_run = true;
        }
    }
    identifier
}

#[cfg(test)]
mod tests;
