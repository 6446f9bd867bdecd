use super::*;
use crate::doc::index::ContentIndex;
use crate::doc::model::ContentDocument;
use crate::i18n::localizer::Localizer;
use crate::render::page::{DEFAULT_REFERENCE_LIMIT, PageState};
use serde_json::json;

fn render_downloads(doc: serde_json::Value, lang: &str) -> String {
    let idx = ContentIndex::from_document(serde_json::from_value::<ContentDocument>(doc).unwrap());
    let st = PageState {
        language: lang.to_string(),
        references_expanded: false,
        reference_limit: DEFAULT_REFERENCE_LIMIT,
        experience_expanded: false,
        experience_filter: None,
    };
    let loc = Localizer::new(&idx.document().i18n.strings, &st.language, "en");
    let ctx = RenderCtx {
        index: &idx,
        loc,
        state: &st,
    };
    render(idx.section("downloads").unwrap(), &ctx)
}

#[test]
fn item_with_url_gets_a_download_link() {
    let html = render_downloads(
        json!({
            "sections": [{"id": "downloads", "items": [
                {"label": "CV (PDF)", "url": "@files.cv"}
            ]}],
            "assets": {"files": {"cv": "https://cdn/cv.pdf"}}
        }),
        "en",
    );
    assert!(html.contains("<a class=\"btn\" download href=\"https://cdn/cv.pdf\">"));
    assert!(html.contains("CV (PDF)"));
    assert!(!html.contains("Available on request"));
}

#[test]
fn item_without_url_says_on_request() {
    let html = render_downloads(
        json!({"sections": [{"id": "downloads", "items": [{"label": "References"}]}]}),
        "en",
    );
    assert!(!html.contains("<a"));
    assert!(html.contains("Available on request"));
}

#[test]
fn unresolvable_token_never_renders_a_broken_link() {
    let html = render_downloads(
        json!({"sections": [{"id": "downloads", "items": [
            {"label": "CV", "url": "@files.missing"}
        ]}]}),
        "en",
    );
    assert!(!html.contains("<a"));
    assert!(html.contains("Available on request"));
}

#[test]
fn null_url_falls_through_to_file() {
    let html = render_downloads(
        json!({
            "sections": [{"id": "downloads", "items": [
                {"label": "CV", "url": null, "file": "@files.cv"}
            ]}],
            "assets": {"files": {"cv": "https://cdn/cv.pdf"}}
        }),
        "en",
    );
    assert!(html.contains("href=\"https://cdn/cv.pdf\""));
    assert!(!html.contains("Available on request"));
}

#[test]
fn on_request_line_is_localized() {
    let html = render_downloads(
        json!({
            "sections": [{"id": "downloads", "items": [{"label": "CV"}]}],
            "ui": {"language_switcher": {"available": ["en", "de"], "default": "de"}}
        }),
        "de",
    );
    assert!(html.contains("Auf Anfrage erhältlich"));
}
