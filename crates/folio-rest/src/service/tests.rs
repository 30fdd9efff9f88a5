//! Unit tests for the in-memory section service.

use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn service() -> InMemorySectionService {
    InMemorySectionService::new()
}

#[rstest]
fn assigns_sequential_ids_from_one(service: InMemorySectionService) {
    let first = service
        .create_section(SectionCreateStruct::named("Standard"))
        .expect("create");
    let second = service
        .create_section(SectionCreateStruct::named("Media"))
        .expect("create");
    assert_eq!((first.id, second.id), (1, 2));
}

#[rstest]
fn load_returns_sections_in_creation_order(service: InMemorySectionService) {
    for name in ["Standard", "Media", "Users"] {
        service
            .create_section(SectionCreateStruct::named(name))
            .expect("create");
    }
    let names: Vec<String> = service
        .load_sections()
        .expect("load")
        .into_iter()
        .map(|section| section.name)
        .collect();
    assert_eq!(names, vec!["Standard", "Media", "Users"]);
}

#[rstest]
fn explicit_identifier_is_kept(service: InMemorySectionService) {
    let section = service
        .create_section(SectionCreateStruct {
            name: "Media Files".into(),
            identifier: Some("media".into()),
        })
        .expect("create");
    assert_eq!(section.identifier, "media");
}

#[rstest]
#[case::single_word("Products", "products")]
#[case::spaces("Media Files", "media_files")]
#[case::separator_run("Top -- Level", "top_level")]
#[case::trailing("Users!", "users_")]
fn derives_identifier_from_name(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(identifier_from_name(name), expected);
}

#[test]
fn empty_store_loads_no_sections() {
    assert!(InMemorySectionService::new().load_sections().expect("load").is_empty());
}
