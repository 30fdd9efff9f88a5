//! Unit tests for the section controller.

use folio_config::Config;
use folio_input::{ConvertError, InputError, InputErrorKind, ParseError};
use mockall::mock;
use rstest::{fixture, rstest};

use super::*;
use crate::bootstrap::input_dispatcher_for;
use crate::service::{InMemorySectionService, ServiceError};
use crate::values::SectionCreateStruct;

mock! {
    Service {}
    impl SectionService for Service {
        fn load_sections(&self) -> Result<Vec<Section>, ServiceError>;
        fn create_section(&self, create: SectionCreateStruct) -> Result<Section, ServiceError>;
    }
}

const LIMIT: u64 = 64;

fn section(id: u64, identifier: &str, name: &str) -> Section {
    Section {
        id,
        identifier: identifier.to_owned(),
        name: name.to_owned(),
    }
}

fn controller_with<S: SectionService>(service: S) -> SectionController<S> {
    SectionController::new(input_dispatcher_for(&Config::default()), service, LIMIT)
}

#[fixture]
fn controller() -> SectionController<InMemorySectionService> {
    controller_with(InMemorySectionService::new())
}

// ---------------------------------------------------------------------------
// Section creation
// ---------------------------------------------------------------------------

#[rstest]
#[case::json("application/vnd.folio.SectionInput+json", r#"{"name":"Products"}"#)]
#[case::yaml("application/vnd.folio.SectionInput+yaml", "name: Products\n")]
#[case::alias("section+json", r#"{"name":"Products"}"#)]
#[case::charset("section+json; charset=utf-8", r#"{"name":"Products"}"#)]
fn creates_section_from_each_format(
    controller: SectionController<InMemorySectionService>,
    #[case] content_type: &str,
    #[case] body: &str,
) {
    let created = controller
        .create_section(Request::with_content_type(content_type, body))
        .expect("create");
    assert_eq!(created, section(1, "products", "Products"));
    assert_eq!(
        controller.list_sections().expect("list").sections,
        vec![created]
    );
}

#[test]
fn forwards_parsed_payload_to_service() {
    let mut service = MockService::new();
    service
        .expect_create_section()
        .withf(|create: &SectionCreateStruct| {
            create.name == "Media" && create.identifier.as_deref() == Some("media")
        })
        .once()
        .returning(|create| Ok(section(7, "media", &create.name)));

    let controller = controller_with(service);
    let created = controller
        .create_section(Request::with_content_type(
            "section+json",
            r#"{"name":"Media","identifier":"media"}"#,
        ))
        .expect("create");
    assert_eq!(created.id, 7);
}

#[test]
fn service_is_not_called_for_rejected_input() {
    let mut service = MockService::new();
    service.expect_create_section().never();
    let controller = controller_with(service);

    let err = controller
        .create_section(Request::with_content_type("section+json", "{invalid"))
        .expect_err("invalid body");
    assert!(
        matches!(
            &err,
            RestError::Input(InputError::BodyDecode {
                source: ConvertError::Json(_),
                ..
            })
        ),
        "got {err:?}"
    );
}

#[rstest]
fn other_input_kinds_are_unexpected(controller: SectionController<InMemorySectionService>) {
    let err = controller
        .create_section(Request::with_content_type(
            "sort+json",
            r#"{"target":"location_path_string"}"#,
        ))
        .expect_err("sort clause is not a section");
    assert!(
        matches!(&err, RestError::UnexpectedInput { media, .. } if media == "sort"),
        "got {err:?}"
    );
    assert_eq!(err.status_code(), 400);
}

#[rstest]
fn oversized_body_is_rejected_before_dispatch(
    controller: SectionController<InMemorySectionService>,
) {
    let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(100));
    let err = controller
        .create_section(Request::with_content_type("section+json", body))
        .expect_err("too large");
    assert!(
        matches!(err, RestError::PayloadTooLarge { size: 111, max_size: LIMIT }),
        "got {err:?}"
    );
    assert_eq!(err.status_code(), 413);
}

#[rstest]
fn body_at_limit_is_accepted(controller: SectionController<InMemorySectionService>) {
    let padding = " ".repeat(64 - r#"{"name":"Products"}"#.len());
    let body = format!(r#"{{"name":"Products"}}{padding}"#);
    assert_eq!(body.len(), 64);
    controller
        .create_section(Request::with_content_type("section+json", body))
        .expect("body at the limit");
}

#[test]
fn service_failure_maps_to_internal_error() {
    let mut service = MockService::new();
    service
        .expect_create_section()
        .returning(|_| Err(ServiceError::internal("disk full")));
    let controller = controller_with(service);

    let err = controller
        .create_section(Request::with_content_type("section+json", r#"{"name":"Media"}"#))
        .expect_err("service fails");
    assert_eq!(err.status_code(), 500);
    assert!(!err.is_client_error());
    assert_eq!(err.to_string(), "section service failure: disk full");
}

// ---------------------------------------------------------------------------
// Status mapping
// ---------------------------------------------------------------------------

#[rstest]
#[case::missing_content_type(None, r#"{"name":"Media"}"#, 400, InputErrorKind::MissingContentType)]
#[case::malformed(Some("application/json"), "{}", 400, InputErrorKind::MalformedContentType)]
#[case::separator_in_parameters(
    Some("section+json; profile=a+b"),
    r#"{"name":"Media"}"#,
    400,
    InputErrorKind::MalformedContentType
)]
#[case::unsupported_format(Some("section+xml"), "<section/>", 415, InputErrorKind::UnsupportedFormat)]
#[case::decode(Some("section+yaml"), "name: [", 400, InputErrorKind::BodyDecode)]
#[case::unknown_media(Some("folder+json"), "{}", 415, InputErrorKind::UnknownMediaType)]
#[case::invalid_payload(Some("section+json"), r#"{"title":"Media"}"#, 400, InputErrorKind::InvalidPayload)]
#[case::array_payload(Some("section+json"), r#"["Products"]"#, 400, InputErrorKind::InvalidPayload)]
#[case::scalar_payload(Some("section+yaml"), "Products\n", 400, InputErrorKind::InvalidPayload)]
fn input_failures_map_to_status(
    controller: SectionController<InMemorySectionService>,
    #[case] content_type: Option<&str>,
    #[case] body: &str,
    #[case] status: u16,
    #[case] kind: InputErrorKind,
) {
    let request = Request::new(content_type.map(str::to_owned), body);
    let err = controller.create_section(request).expect_err("rejected");
    assert_eq!(err.status_code(), status, "for {err}");
    assert!(err.is_client_error());
    match err {
        RestError::Input(input) => assert_eq!(input.kind(), kind),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn unknown_media_error_names_the_media() {
    let err = RestError::from(InputError::Parse(ParseError::unknown_media_type("folder")));
    assert!(err.to_string().contains("folder"), "got {err}");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn list_sections_wraps_service_result() {
    let mut service = MockService::new();
    service
        .expect_load_sections()
        .once()
        .returning(|| Ok(vec![section(1, "standard", "Standard")]));
    let controller = controller_with(service);

    let list = controller.list_sections().expect("list");
    assert_eq!(list.sections, vec![section(1, "standard", "Standard")]);
}

#[test]
fn list_sections_propagates_service_failure() {
    let mut service = MockService::new();
    service
        .expect_load_sections()
        .returning(|| Err(ServiceError::internal("offline")));
    let controller = controller_with(service);

    let err = controller.list_sections().expect_err("service fails");
    assert!(matches!(err, RestError::Service(_)), "got {err:?}");
}

#[test]
fn request_without_content_type_builds_headerless_message() {
    let request = Request::new(None, "body");
    assert!(request.into_message().headers().is_empty());
    let message = Request::with_content_type("section+json", "body").into_message();
    assert_eq!(message.content_type(), Some("section+json"));
    assert_eq!(message.body(), b"body");
}

#[test]
fn non_object_body_never_reaches_service() {
    let mut service = MockService::new();
    service.expect_create_section().never();
    let controller = controller_with(service);

    let err = controller
        .create_section(Request::with_content_type("section+json", r#"["Products"]"#))
        .expect_err("array body");
    assert!(
        matches!(
            &err,
            RestError::Input(InputError::Parse(ParseError::InvalidPayload { media, .. }))
                if media == "section"
        ),
        "got {err:?}"
    );
}

#[rstest]
fn parse_input_returns_sort_clause(controller: SectionController<InMemorySectionService>) {
    let input = controller
        .parse_input(Request::with_content_type(
            "sort+json",
            r#"{"target":"location_depth"}"#,
        ))
        .expect("sort clause");
    assert_eq!(input.kind(), "sort_clause");
}
