use std::collections::BTreeMap;

use chrono::Datelike;

use crate::doc::index::ContentIndex;
use crate::doc::model::SectionKind;
use crate::foundation::error::VitaeResult;
use crate::i18n::localizer::Localizer;
use crate::render::sections::{self, RenderCtx};

/// Default number of reference cards visible while collapsed.
pub const DEFAULT_REFERENCE_LIMIT: usize = 3;

/// Slot name of the language switcher fragment.
pub const LANGUAGE_SWITCHER_SLOT: &str = "language-switcher";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Mutable presentation state of one page instance.
///
/// Owned by a [`PageController`] rather than living in module globals, so
/// independent instances (and tests) cannot interfere with each other. The
/// state resets only when the controller is dropped, mirroring a full page
/// reload.
pub struct PageState {
    /// Active display language.
    pub language: String,
    /// Whether reference cards beyond the limit are visible.
    pub references_expanded: bool,
    /// Number of reference cards visible while collapsed.
    pub reference_limit: usize,
    /// Whether every experience details block is open.
    pub experience_expanded: bool,
    /// Active experience filter query, if any.
    pub experience_filter: Option<String>,
}

impl PageState {
    fn new(language: String) -> Self {
        Self {
            language,
            references_expanded: false,
            reference_limit: DEFAULT_REFERENCE_LIMIT,
            experience_expanded: false,
            experience_filter: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A navigation link derived from a rendered section.
pub struct NavLink {
    /// In-page anchor target (`#<section-id>`).
    pub id: String,
    /// Localized link label.
    pub label: String,
}

#[derive(Clone, Debug)]
/// Active-section tracker rebuilt on every render pass.
///
/// The previous observer is dropped before a new one is installed, so two
/// render passes never leave two observers registered. The generation
/// counter exists to make that property observable.
pub struct NavObserver {
    generation: u64,
    section_ids: Vec<String>,
}

impl NavObserver {
    /// Monotonic rebuild counter of the owning controller.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Active section id for a normalized scroll progress in `[0, 1]`.
    ///
    /// Sections occupy equal bands in rendered order; callbacks for any
    /// progress value are idempotent and order-independent.
    pub fn active_section(&self, progress: f64) -> Option<&str> {
        if self.section_ids.is_empty() {
            return None;
        }
        let p = progress.clamp(0.0, 1.0);
        let idx = ((p * self.section_ids.len() as f64) as usize).min(self.section_ids.len() - 1);
        Some(&self.section_ids[idx])
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One complete render pass: named HTML fragments plus page chrome data.
///
/// Slots fully supersede prior content; re-rendering never accumulates
/// output. [`RenderedPage::to_html`] assembles the deterministic full page.
pub struct RenderedPage {
    lang: String,
    title: String,
    slots: BTreeMap<String, String>,
    nav: Vec<NavLink>,
    footer_year: i32,
}

impl RenderedPage {
    /// Document language attribute of this pass.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Rendered fragment for a named slot, if that section exists.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// Navigation links in document order.
    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    /// Footer copyright year.
    pub fn footer_year(&self) -> i32 {
        self.footer_year
    }

    /// Assemble the full page: static shell plus every non-empty slot.
    pub fn to_html(&self) -> String {
        use crate::render::html::esc;

        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html><html");
        out.push_str(&format!(" lang=\"{}\"", esc(&self.lang)));
        out.push_str("><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>");
        out.push_str(&esc(&self.title));
        out.push_str("</title></head><body><header class=\"topbar\"><button class=\"nav-toggle\" data-action=\"toggle-nav\" aria-expanded=\"false\">☰</button><nav>");
        for link in &self.nav {
            out.push_str(&format!(
                "<a href=\"#{}\">{}</a>",
                esc(&link.id),
                esc(&link.label)
            ));
        }
        out.push_str("</nav>");
        if let Some(switcher) = self.slot(LANGUAGE_SWITCHER_SLOT) {
            out.push_str(switcher);
        }
        out.push_str("</header><main>");
        for kind in SectionKind::ORDER {
            let Some(fragment) = self.slot(kind.id()) else {
                continue;
            };
            out.push_str(&format!("<section id=\"{}\">", esc(kind.id())));
            if kind != SectionKind::Hero {
                if let Some(link) = self.nav.iter().find(|l| l.id == kind.id()) {
                    out.push_str(&format!("<h2>{}</h2>", esc(&link.label)));
                }
            }
            out.push_str(&format!(
                "<div data-slot=\"{}\">{fragment}</div></section>",
                esc(kind.id())
            ));
        }
        out.push_str(&format!(
            "</main><footer><span data-slot=\"footer-year\">{}</span></footer></body></html>",
            self.footer_year
        ));
        out
    }
}

/// The bare page shell shown when the content document cannot be parsed.
pub fn static_shell() -> String {
    concat!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
        "<title>Profile</title></head><body><main></main></body></html>"
    )
    .to_string()
}

/// Owns the parsed document, the presentation state, and the nav observer.
///
/// [`PageController::render_page`] is the single entry point that commits
/// state into output; it is safe to call repeatedly and each pass fully
/// supersedes the previous one.
#[derive(Debug)]
pub struct PageController {
    index: ContentIndex,
    state: PageState,
    observer: Option<NavObserver>,
    passes: u64,
}

impl PageController {
    /// Build a controller over an indexed document.
    pub fn new(index: ContentIndex) -> Self {
        let language = index.initial_language().to_string();
        Self {
            index,
            state: PageState::new(language),
            observer: None,
            passes: 0,
        }
    }

    /// Parse, index, and wrap a serialized content document.
    pub fn from_json(blob: &str) -> VitaeResult<Self> {
        Ok(Self::new(ContentIndex::load(blob)?))
    }

    /// The indexed document.
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Current presentation state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// The nav observer of the latest pass, if one has run.
    pub fn nav_observer(&self) -> Option<&NavObserver> {
        self.observer.as_ref()
    }

    /// Switch the active language; ignored (returning `false`) when the
    /// language is not offered by the document.
    pub fn set_language(&mut self, lang: &str) -> bool {
        let available = self.index.available_languages();
        if !available.iter().any(|l| *l == lang) {
            tracing::warn!(lang, "ignoring unavailable language");
            return false;
        }
        self.state.language = lang.to_string();
        true
    }

    /// Flip the references-expanded flag; returns the new value.
    pub fn toggle_references(&mut self) -> bool {
        self.state.references_expanded = !self.state.references_expanded;
        self.state.references_expanded
    }

    /// Open or close every experience details block in bulk.
    pub fn set_experience_expanded(&mut self, expanded: bool) {
        self.state.experience_expanded = expanded;
    }

    /// Set or clear the experience filter query.
    pub fn set_experience_filter(&mut self, query: Option<String>) {
        self.state.experience_filter = query.filter(|q| !q.trim().is_empty());
    }

    /// Run one full render pass in fixed section order.
    ///
    /// Also rebuilds the nav observer (the previous one is dropped first)
    /// and refreshes nav labels and the footer year. Calling this twice with
    /// unchanged state produces an equal [`RenderedPage`].
    #[tracing::instrument(skip(self), fields(lang = %self.state.language))]
    pub fn render_page(&mut self) -> RenderedPage {
        // Dispose the previous observer before anything else so a re-entrant
        // pass can never observe two of them.
        self.observer = None;

        let doc = self.index.document();
        let loc = Localizer::new(
            &doc.i18n.strings,
            &self.state.language,
            self.index.default_language(),
        );
        let ctx = RenderCtx {
            index: &self.index,
            loc,
            state: &self.state,
        };

        let mut slots = BTreeMap::new();
        slots.insert(
            LANGUAGE_SWITCHER_SLOT.to_string(),
            sections::language::render(&ctx),
        );
        for kind in SectionKind::ORDER {
            if self.index.section(kind.id()).is_some() {
                slots.insert(kind.id().to_string(), sections::render_section(kind, &ctx));
            }
        }

        // Nav labels follow document order; the hero is the page top, not a
        // nav destination.
        let nav: Vec<NavLink> = doc
            .sections
            .iter()
            .filter(|s| {
                SectionKind::from_id(&s.id).is_some_and(|k| k != SectionKind::Hero)
            })
            .map(|s| NavLink {
                id: s.id.clone(),
                label: ctx.section_title(s),
            })
            .collect();

        self.passes += 1;
        self.observer = Some(NavObserver {
            generation: self.passes,
            section_ids: nav.iter().map(|l| l.id.clone()).collect(),
        });

        let title = doc
            .meta
            .name
            .clone()
            .unwrap_or_else(|| "Profile".to_string());

        RenderedPage {
            lang: self.state.language.clone(),
            title,
            slots,
            nav,
            footer_year: chrono::Utc::now().year(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/page.rs"]
mod tests;
