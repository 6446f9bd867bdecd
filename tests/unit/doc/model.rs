use super::*;
use serde_json::json;

#[test]
fn parses_minimal_document() {
    let doc = ContentDocument::from_json("{}").unwrap();
    assert!(doc.sections.is_empty());
    assert!(doc.meta.language.is_none());
}

#[test]
fn section_payload_stays_open() {
    let blob = json!({
        "sections": [
            {"id": "experience", "title": "Experience", "items": [{"company": "Acme"}]}
        ]
    })
    .to_string();
    let doc = ContentDocument::from_json(&blob).unwrap();
    let section = &doc.sections[0];
    assert_eq!(section.id, "experience");
    assert!(section.body.get("items").unwrap().is_array());
}

#[test]
fn malformed_blob_is_a_parse_error() {
    let err = ContentDocument::from_json("{not json").unwrap_err();
    assert!(matches!(err, VitaeError::Parse(_)));
}

#[test]
fn duplicate_section_ids_are_rejected() {
    let blob = json!({
        "sections": [{"id": "about"}, {"id": "about"}]
    })
    .to_string();
    let err = ContentDocument::from_json(&blob).unwrap_err();
    assert!(err.to_string().contains("duplicate section id"));
}

#[test]
fn empty_section_id_is_rejected() {
    let blob = json!({"sections": [{"id": "  "}]}).to_string();
    assert!(ContentDocument::from_json(&blob).is_err());
}

#[test]
fn export_round_trips() {
    let blob = json!({
        "sections": [{"id": "about", "title": "About", "columns": []}],
        "meta": {"language": "en"}
    })
    .to_string();
    let doc = ContentDocument::from_json(&blob).unwrap();
    let exported = doc.to_json_pretty().unwrap();
    let again = ContentDocument::from_json(&exported).unwrap();
    assert_eq!(again.sections[0].id, "about");
    assert_eq!(again.meta.language.as_deref(), Some("en"));
}

#[test]
fn kind_ids_form_a_closed_set() {
    for kind in SectionKind::ORDER {
        assert_eq!(SectionKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(SectionKind::from_id("particles"), None);
}
