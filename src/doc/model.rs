use std::collections::BTreeMap;

use serde_json::Value;

use crate::foundation::error::{VitaeError, VitaeResult};

/// Open field payload of a section or item.
///
/// Heterogeneous content (items, columns, groups, language-suffixed field
/// variants) stays schemaless and is interpreted defensively by the
/// renderers through [`crate::at`] and the localization resolver.
pub type Fields = serde_json::Map<String, Value>;

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// A complete profile content document.
///
/// The document is a pure data model parsed once per page lifetime and never
/// mutated afterwards; all mutable presentation state lives in
/// [`crate::PageState`]. Rendering is performed by [`crate::PageController`].
pub struct ContentDocument {
    /// Ordered top-level content sections.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Asset map: nested objects with URL string leaves, addressed by
    /// `@dotted.path` tokens.
    #[serde(default)]
    pub assets: Value,
    /// Per-document translation tables.
    #[serde(default)]
    pub i18n: I18nConfig,
    /// UI configuration (language switcher).
    #[serde(default)]
    pub ui: UiConfig,
    /// Document metadata.
    #[serde(default)]
    pub meta: MetaConfig,
    /// Layout configuration consumed by the hero renderer.
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A named top-level content block.
pub struct Section {
    /// Unique key, doubling as output slot name, in-page anchor, and
    /// translation-key namespace (`sections.<id>.title`).
    pub id: String,
    /// Default-language display title.
    #[serde(default)]
    pub title: String,
    /// Type-specific payload (`items`, `columns`, `groups`, ...).
    #[serde(flatten)]
    pub body: Fields,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Per-document translation tables, keyed by language code.
pub struct I18nConfig {
    /// `language code -> translation key -> string`.
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// UI configuration block.
pub struct UiConfig {
    /// Language switcher configuration, if the page offers one.
    #[serde(default)]
    pub language_switcher: Option<LanguageSwitcher>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Language switcher configuration.
pub struct LanguageSwitcher {
    /// Offered language codes, in display order.
    #[serde(default)]
    pub available: Vec<String>,
    /// Initially selected language.
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Document metadata.
pub struct MetaConfig {
    /// Fallback default language when the switcher does not name one.
    #[serde(default)]
    pub language: Option<String>,
    /// Page title / profile owner name.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Layout configuration.
pub struct LayoutConfig {
    /// Hero block configuration (headline, subheadline, video).
    #[serde(default)]
    pub hero: Fields,
}

impl ContentDocument {
    /// Parse a content document from its serialized JSON blob.
    pub fn from_json(blob: &str) -> VitaeResult<Self> {
        let doc: Self = serde_json::from_str(blob).map_err(|e| VitaeError::parse(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Serialize the document back to pretty-printed JSON (raw export).
    pub fn to_json_pretty(&self) -> VitaeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| VitaeError::serde(e.to_string()))
    }

    /// Validate the section-id invariants.
    ///
    /// Ids must be non-empty and unique: they serve as output slot names and
    /// translation-key namespaces, so a collision would make two renderers
    /// fight over one slot.
    pub fn validate(&self) -> VitaeResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(VitaeError::document("section id must be non-empty"));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(VitaeError::document(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Closed set of section kinds the page knows how to render.
///
/// Sections are discriminated by their `id`; ids outside this set are
/// carried in the document but skipped by the page renderer.
pub enum SectionKind {
    /// Hero banner with headline and background video.
    Hero,
    /// About block with component-discriminated columns.
    About,
    /// Work experience timeline.
    Experience,
    /// Project highlight cards.
    Projects,
    /// Leadership principle cards.
    Leadership,
    /// Education, publications, and awards (grouped or legacy flat shape).
    Education,
    /// Reference quotes with a display limit.
    References,
    /// CV download entries.
    Downloads,
}

impl SectionKind {
    /// Fixed render order of the page.
    pub const ORDER: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Leadership,
        SectionKind::Education,
        SectionKind::References,
        SectionKind::Downloads,
    ];

    /// Map a section id to its kind.
    pub fn from_id(id: &str) -> Option<SectionKind> {
        match id {
            "hero" => Some(SectionKind::Hero),
            "about" => Some(SectionKind::About),
            "experience" => Some(SectionKind::Experience),
            "projects" => Some(SectionKind::Projects),
            "leadership" => Some(SectionKind::Leadership),
            "education" => Some(SectionKind::Education),
            "references" => Some(SectionKind::References),
            "downloads" => Some(SectionKind::Downloads),
            _ => None,
        }
    }

    /// The section id (and output slot name) for this kind.
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Leadership => "leadership",
            SectionKind::Education => "education",
            SectionKind::References => "references",
            SectionKind::Downloads => "downloads",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/doc/model.rs"]
mod tests;
