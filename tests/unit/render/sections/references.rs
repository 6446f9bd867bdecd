use super::*;
use crate::doc::index::ContentIndex;
use crate::doc::model::ContentDocument;
use crate::i18n::localizer::Localizer;
use crate::render::page::{DEFAULT_REFERENCE_LIMIT, PageState};
use serde_json::json;

fn doc_with_refs(n: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..n)
        .map(|i| json!({"name": format!("Ref {i}"), "text": format!("Quote {i}")}))
        .collect();
    json!({"sections": [{"id": "references", "items": items}]})
}

fn render_refs(doc: serde_json::Value, expanded: bool) -> String {
    let idx = ContentIndex::from_document(serde_json::from_value::<ContentDocument>(doc).unwrap());
    let st = PageState {
        language: "en".to_string(),
        references_expanded: expanded,
        reference_limit: DEFAULT_REFERENCE_LIMIT,
        experience_expanded: false,
        experience_filter: None,
    };
    let loc = Localizer::new(&idx.document().i18n.strings, "en", "en");
    let ctx = RenderCtx {
        index: &idx,
        loc,
        state: &st,
    };
    render(idx.section("references").unwrap(), &ctx)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn collapsed_hides_exactly_the_overflow() {
    let html = render_refs(doc_with_refs(5), false);
    assert_eq!(count(&html, "<article class=\"ref-card\">"), 3);
    assert_eq!(count(&html, "<article class=\"ref-card hidden\">"), 2);
    assert!(html.contains("data-action=\"expand-references\""));
    assert!(html.contains("Show more"));
}

#[test]
fn expanded_shows_all_cards() {
    let html = render_refs(doc_with_refs(5), true);
    assert_eq!(count(&html, "<article class=\"ref-card\">"), 5);
    assert_eq!(count(&html, "hidden"), 0);
    assert!(html.contains("data-action=\"collapse-references\""));
    assert!(html.contains("Show less"));
}

#[test]
fn controls_absent_when_count_within_limit() {
    let html = render_refs(doc_with_refs(3), false);
    assert_eq!(count(&html, "<article class=\"ref-card\">"), 3);
    assert!(!html.contains("ref-toggle"));
}

#[test]
fn card_meta_joins_optional_parts() {
    let html = render_refs(
        json!({"sections": [{"id": "references", "items": [{
            "name": "Yannick",
            "title": "Web Developer",
            "date": "October 20, 2025",
            "relation_detail": "reported directly",
            "text": "Great lead."
        }]}]}),
        false,
    );
    assert!(html.contains("Web Developer · October 20, 2025 · reported directly"));
    assert!(html.contains("<blockquote class=\"quote\">Great lead.</blockquote>"));
}
