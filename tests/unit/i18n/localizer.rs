use super::*;
use serde_json::json;
use std::collections::BTreeMap;

fn strings(lang: &str, pairs: &[(&str, &str)]) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut table = BTreeMap::new();
    table.insert(
        lang.to_string(),
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    table
}

fn fields(v: serde_json::Value) -> Fields {
    v.as_object().unwrap().clone()
}

#[test]
fn translate_prefers_document_table() {
    let table = strings("de", &[("sections.experience.title", "  Laufbahn \n")]);
    let loc = Localizer::new(&table, "de", "en");
    // document table wins over the built-in German table, normalized
    assert_eq!(loc.translate("sections.experience.title", "x"), "Laufbahn");
}

#[test]
fn translate_falls_back_to_builtin_then_literal() {
    let table = BTreeMap::new();
    let loc = Localizer::new(&table, "de", "en");
    assert_eq!(
        loc.translate("sections.experience.title", "x"),
        "Berufserfahrung"
    );
    assert_eq!(loc.translate("unknown.key", "fallback  text"), "fallback text");

    let loc = Localizer::new(&table, "en", "en");
    assert_eq!(loc.translate("sections.experience.title", "Work"), "Work");
}

#[test]
fn suffixed_field_wins_for_non_default_language() {
    let table = BTreeMap::new();
    let item = fields(json!({"title": "Award A", "title_de": "Preis A"}));

    let de = Localizer::new(&table, "de", "en");
    assert_eq!(de.field_str(&item, "title", ""), "Preis A");

    // default language ignores the suffixed sibling
    let en = Localizer::new(&table, "en", "en");
    assert_eq!(en.field_str(&item, "title", ""), "Award A");
}

#[test]
fn base_field_used_when_suffix_absent_or_null() {
    let table = BTreeMap::new();
    let de = Localizer::new(&table, "de", "en");

    let item = fields(json!({"title": "Award A"}));
    assert_eq!(de.field_str(&item, "title", ""), "Award A");

    let item = fields(json!({"title": "Award A", "title_de": null}));
    assert_eq!(de.field_str(&item, "title", ""), "Award A");
}

#[test]
fn empty_string_is_a_present_value() {
    let table = BTreeMap::new();
    let de = Localizer::new(&table, "de", "en");
    let item = fields(json!({"title": "Base", "title_de": ""}));
    assert_eq!(de.field_str(&item, "title", "fallback"), "");
}

#[test]
fn missing_field_returns_caller_fallback() {
    let table = BTreeMap::new();
    let loc = Localizer::new(&table, "en", "en");
    let item = fields(json!({}));
    assert_eq!(loc.field_str(&item, "title", "fallback"), "fallback");
    assert_eq!(loc.field_str(&item, "title", ""), "");
    assert!(loc.localize_field(&item, "title").is_none());
}

#[test]
fn field_list_skips_non_strings() {
    let table = BTreeMap::new();
    let loc = Localizer::new(&table, "en", "en");
    let item = fields(json!({"skills": ["a ", 3, null, " b"]}));
    assert_eq!(loc.field_list(&item, "skills"), vec!["a", "b"]);
    assert!(loc.field_list(&item, "missing").is_empty());
}

#[test]
fn localized_list_variant_is_preferred() {
    let table = BTreeMap::new();
    let de = Localizer::new(&table, "de", "en");
    let item = fields(json!({"skills": ["Leadership"], "skills_de": ["Führung"]}));
    assert_eq!(de.field_list(&item, "skills"), vec!["Führung"]);
}
