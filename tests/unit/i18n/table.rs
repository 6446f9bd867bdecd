use super::*;

#[test]
fn german_table_covers_section_titles() {
    assert_eq!(builtin("de", "sections.experience.title"), Some("Berufserfahrung"));
    assert_eq!(builtin("de", "sections.references.title"), Some("Referenzen"));
    assert_eq!(builtin("de", "nope"), None);
}

#[test]
fn only_german_is_bundled() {
    assert_eq!(builtin("fr", "sections.experience.title"), None);
    assert_eq!(builtin("en", "sections.experience.title"), None);
}
