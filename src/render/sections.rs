//! Per-section renderers.
//!
//! Every renderer is a pure function `(section, ctx) -> String` producing
//! the HTML fragment for its named output slot. Renderers are defensive: a
//! missing section, item, or field degrades to less output, never to an
//! error, and no renderer can abort the others.

pub(crate) mod about;
pub(crate) mod downloads;
pub(crate) mod education;
pub(crate) mod experience;
pub(crate) mod hero;
pub(crate) mod language;
pub(crate) mod leadership;
pub(crate) mod projects;
pub(crate) mod references;

use std::borrow::Cow;

use serde_json::Value;

use crate::doc::assets::resolve_asset;
use crate::doc::index::ContentIndex;
use crate::doc::model::{Fields, Section, SectionKind};
use crate::i18n::localizer::Localizer;
use crate::render::page::PageState;

/// Shared read-only context handed to every section renderer.
pub struct RenderCtx<'a> {
    /// Parsed and indexed content document.
    pub index: &'a ContentIndex,
    /// Localization resolver for the active language.
    pub loc: Localizer<'a>,
    /// Current presentation state.
    pub state: &'a PageState,
}

impl RenderCtx<'_> {
    /// Resolve an asset token through the document asset map.
    pub fn asset_url<'t>(&self, token: &'t str) -> Cow<'t, str> {
        resolve_asset(token, &self.index.document().assets)
    }

    /// Display title for a section: translation table first, then the
    /// section's own default-language title.
    pub fn section_title(&self, section: &Section) -> String {
        self.loc
            .translate(&format!("sections.{}.title", section.id), &section.title)
    }
}

/// Render one section kind into its slot fragment.
///
/// A section absent from the document renders as the empty fragment.
pub(crate) fn render_section(kind: SectionKind, ctx: &RenderCtx<'_>) -> String {
    let Some(section) = ctx.index.section(kind.id()) else {
        return String::new();
    };
    match kind {
        SectionKind::Hero => hero::render(section, ctx),
        SectionKind::About => about::render(section, ctx),
        SectionKind::Experience => experience::render(section, ctx),
        SectionKind::Projects => projects::render(section, ctx),
        SectionKind::Leadership => leadership::render(section, ctx),
        SectionKind::Education => education::render(section, ctx),
        SectionKind::References => references::render(section, ctx),
        SectionKind::Downloads => downloads::render(section, ctx),
    }
}

/// View a JSON value as an item field map, if it is an object.
pub(crate) fn as_fields(value: &Value) -> Option<&Fields> {
    value.as_object()
}

/// The `items` list of a section body, tolerating absence.
pub(crate) fn items<'a>(body: &'a Fields, key: &str) -> &'a [Value] {
    body.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}
