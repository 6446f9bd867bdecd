//! Built-in secondary-language strings bundled with the renderer.
//!
//! Document authors normally supply translations through `i18n.strings`;
//! this table backs up the UI chrome and section titles for German pages
//! whose documents carry no table of their own.

/// Look up a built-in translation for `key` in `lang`.
pub(crate) fn builtin(lang: &str, key: &str) -> Option<&'static str> {
    if lang != "de" {
        return None;
    }
    let s = match key {
        "sections.about.title" => "Über mich",
        "sections.experience.title" => "Berufserfahrung",
        "sections.projects.title" => "Projekte",
        "sections.leadership.title" => "Führung",
        "sections.education.title" => "Ausbildung",
        "sections.references.title" => "Referenzen",
        "sections.downloads.title" => "Downloads",
        "sections.publications.title" => "Publikationen",
        "sections.awards.title" => "Auszeichnungen",
        "experience.details" => "Details",
        "experience.responsibilities" => "Aufgaben",
        "experience.key_results" => "Ergebnisse",
        "experience.expand_all" => "Alle ausklappen",
        "experience.collapse_all" => "Alle einklappen",
        "references.show_more" => "Mehr anzeigen",
        "references.show_less" => "Weniger anzeigen",
        "downloads.on_request" => "Auf Anfrage erhältlich",
        "downloads.download" => "Herunterladen",
        "education.thesis" => "Abschlussarbeit",
        "hero.video_unavailable" => "Video nicht verfügbar",
        _ => return None,
    };
    Some(s)
}

/// Keyword sets classifying an education group title, in both working
/// languages. Matching is case-insensitive substring (`Awards & Honors`
/// and `Auszeichnungen` both land on the awards group).
pub(crate) const EDUCATION_KEYWORDS: &[&str] = &["education", "ausbildung", "studium"];
/// Publication group keywords.
pub(crate) const PUBLICATION_KEYWORDS: &[&str] = &["publication", "publikation", "veröffentlichung"];
/// Award group keywords.
pub(crate) const AWARD_KEYWORDS: &[&str] = &["award", "auszeichnung"];

#[cfg(test)]
#[path = "../../tests/unit/i18n/table.rs"]
mod tests;
