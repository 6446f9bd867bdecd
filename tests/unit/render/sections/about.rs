use super::*;
use crate::doc::index::ContentIndex;
use crate::doc::model::ContentDocument;
use crate::i18n::localizer::Localizer;
use crate::render::page::{DEFAULT_REFERENCE_LIMIT, PageState};
use serde_json::json;

fn index_of(doc: serde_json::Value) -> ContentIndex {
    ContentIndex::from_document(serde_json::from_value::<ContentDocument>(doc).unwrap())
}

fn state() -> PageState {
    PageState {
        language: "en".to_string(),
        references_expanded: false,
        reference_limit: DEFAULT_REFERENCE_LIMIT,
        experience_expanded: false,
        experience_filter: None,
    }
}

fn render_about(doc: serde_json::Value, lang: &str) -> String {
    let idx = index_of(doc);
    let mut st = state();
    st.language = lang.to_string();
    let loc = Localizer::new(&idx.document().i18n.strings, &st.language, "en");
    let ctx = RenderCtx {
        index: &idx,
        loc,
        state: &st,
    };
    render(idx.section("about").unwrap(), &ctx)
}

#[test]
fn columns_are_found_by_component_not_position() {
    // skills first, picture last: output order stays photo, text, skills
    let html = render_about(
        json!({
            "sections": [{"id": "about", "columns": [
                {"component": "skills", "items": ["Leadership"]},
                {"component": "about", "text": "Hello world"},
                {"component": "profile_picture", "image": "@images.profile"}
            ]}],
            "assets": {"images": {"profile": "https://cdn/p.jpg"}}
        }),
        "en",
    );
    let photo = html.find("about-photo").unwrap();
    let text = html.find("about-text").unwrap();
    let skills = html.find("about-skills").unwrap();
    assert!(photo < text && text < skills);
    assert!(html.contains("src=\"https://cdn/p.jpg\""));
    assert!(html.contains("<li class=\"tag\">Leadership</li>"));
}

#[test]
fn missing_photo_column_degrades_to_remaining_columns() {
    let html = render_about(
        json!({
            "sections": [{"id": "about", "columns": [
                {"component": "about", "text": "Only text"}
            ]}]
        }),
        "en",
    );
    assert!(!html.contains("about-photo"));
    assert!(html.contains("Only text"));
}

#[test]
fn unresolvable_photo_token_renders_no_figure() {
    let html = render_about(
        json!({
            "sections": [{"id": "about", "columns": [
                {"component": "profile_picture", "image": "@images.missing"}
            ]}]
        }),
        "en",
    );
    assert!(!html.contains("<figure"));
}

#[test]
fn newlines_become_paragraph_breaks() {
    let html = render_about(
        json!({
            "sections": [{"id": "about", "columns": [
                {"component": "about", "text": "First part.\nSecond part."}
            ]}]
        }),
        "en",
    );
    assert!(html.contains("First part.<br/>Second part."));
}

#[test]
fn localized_text_variant_is_preferred() {
    let html = render_about(
        json!({
            "sections": [{"id": "about", "columns": [
                {"component": "about", "text": "English", "text_de": "Deutsch"}
            ]}]
        }),
        "de",
    );
    assert!(html.contains("Deutsch"));
    assert!(!html.contains("English"));
}
