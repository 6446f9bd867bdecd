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

fn render_with(doc: serde_json::Value, st: &PageState) -> String {
    let idx = index_of(doc);
    let loc = Localizer::new(&idx.document().i18n.strings, &st.language, "en");
    let ctx = RenderCtx {
        index: &idx,
        loc,
        state: st,
    };
    render(idx.section("experience").unwrap(), &ctx)
}

fn one_item(item: serde_json::Value) -> serde_json::Value {
    json!({"sections": [{"id": "experience", "items": [item]}]})
}

#[test]
fn header_and_meta_line_join_with_separator() {
    let html = render_with(
        one_item(json!({
            "company": "Medartis AG",
            "position": "Education Manager",
            "dates": "2014 - 2017",
            "location": "Basel",
            "employment_type": "Full-time"
        })),
        &state(),
    );
    assert!(html.contains("Medartis AG — Education Manager"));
    assert!(html.contains("2014 - 2017 · Basel · Full-time"));
}

#[test]
fn blank_meta_parts_are_skipped() {
    let html = render_with(
        one_item(json!({"company": "Acme", "position": "Dev", "location": "Basel"})),
        &state(),
    );
    assert!(html.contains(">Basel</div>"));
    assert!(!html.contains("· ·"));
}

#[test]
fn note_only_item_has_no_details_control() {
    let html = render_with(
        one_item(json!({
            "company": "Acme",
            "position": "Dev",
            "note": "Early career role."
        })),
        &state(),
    );
    assert!(html.contains("Early career role."));
    assert!(!html.contains("<details"));
    assert!(!html.contains("<summary"));
}

#[test]
fn lists_render_inside_details() {
    let html = render_with(
        one_item(json!({
            "company": "Acme",
            "position": "Dev",
            "responsibilities": ["Build things"],
            "key_results": ["Shipped"]
        })),
        &state(),
    );
    assert!(html.contains("<details class=\"exp-details\"><summary>Details</summary>"));
    assert!(html.contains("Responsibilities"));
    assert!(html.contains("<li>Build things</li>"));
    assert!(html.contains("Key Results"));
    assert!(html.contains("<li>Shipped</li>"));
}

#[test]
fn bulk_expanded_state_opens_every_details() {
    let mut st = state();
    st.experience_expanded = true;
    let html = render_with(
        one_item(json!({"company": "Acme", "responsibilities": ["r"]})),
        &st,
    );
    assert!(html.contains("<details class=\"exp-details\" open>"));
}

#[test]
fn controls_render_once_above_items() {
    let html = render_with(one_item(json!({"company": "Acme"})), &state());
    assert!(html.contains("data-action=\"expand-all\""));
    assert!(html.contains("data-action=\"collapse-all\""));
    assert!(html.find("exp-controls").unwrap() < html.find("timeline").unwrap());
}

#[test]
fn filter_hides_non_matching_cards() {
    let mut st = state();
    st.experience_filter = Some("webinar".to_string());
    let html = render_with(
        json!({"sections": [{"id": "experience", "items": [
            {"company": "Acme", "responsibilities": ["Ran 10 Webinars"]},
            {"company": "Other", "responsibilities": ["Unrelated"]}
        ]}]}),
        &st,
    );
    assert!(html.contains("<article class=\"t-item\" id=\"job0\">"));
    assert!(html.contains("<article class=\"t-item hidden\" id=\"job1\">"));
}

#[test]
fn filter_does_not_match_across_field_boundaries() {
    // "time" ends the meta line and "ready" opens the note; the two must
    // not concatenate into a match for "timeready".
    let mut st = state();
    st.experience_filter = Some("timeready".to_string());
    let html = render_with(
        one_item(json!({
            "company": "Acme",
            "employment_type": "Full-time",
            "note": "Ready for new challenges."
        })),
        &st,
    );
    assert!(html.contains("<article class=\"t-item hidden\" id=\"job0\">"));
}

#[test]
fn localized_skills_render_as_pills() {
    let mut st = state();
    st.language = "de".to_string();
    let html = render_with(
        one_item(json!({
            "company": "Acme",
            "skills": ["Leadership"],
            "skills_de": ["Führung"]
        })),
        &st,
    );
    assert!(html.contains("<li class=\"pill\">Führung</li>"));
}
