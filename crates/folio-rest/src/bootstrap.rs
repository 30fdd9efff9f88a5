//! Wiring of configuration, telemetry, and the section controller.

use std::sync::Arc;

use folio_config::{Config, InputFormat};
use folio_input::{Envelope, FormatConverter, InputDispatcher, JsonConverter, YamlConverter};
use ortho_config::OrthoError;
use thiserror::Error;
use tracing::info;

use crate::controller::{RestInputDispatcher, SectionController};
use crate::input::rest_input_parsers;
use crate::service::SectionService;
use crate::telemetry::{self, TelemetryError};

const BOOTSTRAP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::bootstrap");

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Builds the converter for an enabled format.
#[must_use]
pub fn converter_for(format: InputFormat, envelope: Envelope) -> Arc<dyn FormatConverter> {
    match format {
        InputFormat::Json => Arc::new(JsonConverter::with_envelope(envelope)),
        InputFormat::Yaml => Arc::new(YamlConverter::with_envelope(envelope)),
    }
}

/// Builds the REST input dispatcher with one converter per enabled format.
#[must_use]
pub fn input_dispatcher_for(config: &Config) -> RestInputDispatcher {
    let envelope = if config.enveloped_bodies() {
        Envelope::Wrapped
    } else {
        Envelope::Bare
    };
    InputDispatcher::with_converters(
        rest_input_parsers(),
        config
            .input_formats()
            .into_iter()
            .map(|format| (format.as_str(), converter_for(format, envelope))),
    )
}

/// Installs telemetry and builds a section controller over `service`.
///
/// # Errors
///
/// Returns [`BootstrapError::Telemetry`] when the subscriber cannot be
/// installed.
pub fn bootstrap_with<S: SectionService>(
    config: &Config,
    service: S,
) -> Result<SectionController<S>, BootstrapError> {
    telemetry::initialise(config).map_err(|source| BootstrapError::Telemetry { source })?;
    let dispatcher = input_dispatcher_for(config);
    info!(
        target: BOOTSTRAP_TARGET,
        formats = ?dispatcher.formats(),
        enveloped = config.enveloped_bodies(),
        max_body_bytes = config.max_body_bytes(),
        "section controller ready"
    );
    Ok(SectionController::new(
        dispatcher,
        service,
        config.max_body_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use folio_input::{InputErrorKind, Message};

    use super::*;
    use crate::input::RestInput;
    use crate::values::SectionCreateStruct;

    #[test]
    fn default_config_enables_json_and_yaml() {
        let dispatcher = input_dispatcher_for(&Config::default());
        assert_eq!(dispatcher.formats(), vec!["json", "yaml"]);
    }

    #[test]
    fn restricted_config_rejects_disabled_formats() {
        let config = Config {
            input_formats: Some(vec![InputFormat::Json]),
            ..Config::default()
        };
        let dispatcher = input_dispatcher_for(&config);
        let err = dispatcher
            .dispatch(&Message::with_content_type("section+yaml", "name: Media\n"))
            .expect_err("yaml disabled");
        assert_eq!(err.kind(), InputErrorKind::UnsupportedFormat);
    }

    #[test]
    fn enveloped_config_unwraps_named_root() {
        let config = Config {
            enveloped_bodies: Some(true),
            ..Config::default()
        };
        let dispatcher = input_dispatcher_for(&config);
        let input = dispatcher
            .dispatch(&Message::with_content_type(
                "application/vnd.folio.SectionInput+json",
                r#"{"SectionInput":{"name":"Media"}}"#,
            ))
            .expect("dispatch");
        assert_eq!(
            input,
            RestInput::SectionCreate(SectionCreateStruct::named("Media"))
        );
    }
}
