//! Vitae renders a structured profile document into a localized web page.
//!
//! The pipeline turns a content document (sections, columns, items,
//! localized fields, asset references) plus a selected language into
//! deterministic HTML fragments, one per named output slot.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `ContentDocument::from_json` parses the blob once;
//!    [`ContentIndex`] indexes sections by id and resolves the initial
//!    language.
//! 2. **Resolve**: every renderer pulls display strings through
//!    [`Localizer`] (document string table → built-in table → fallback;
//!    `field_de` → `field`), asset URLs through [`resolve_asset`], and
//!    nested fields through the null-safe [`at`] lookup.
//! 3. **Render**: [`PageController::render_page`] invokes each section
//!    renderer in fixed order and fully supersedes all prior output;
//!    switching language or toggling state simply re-runs the pass.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a pass is a pure function of document and
//!   state; same input, identical bytes.
//! - **Fallback over failure**: a missing optional field, an unresolved
//!   asset token, or a malformed video URL degrades to a fallback or an
//!   empty fragment; only an unparseable document is an error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod doc;
mod foundation;
mod i18n;
mod render;

pub use doc::assets::{ASSET_PREFIX, resolve_asset};
pub use doc::index::{ContentIndex, FALLBACK_LANGUAGE};
pub use doc::model::{
    ContentDocument, Fields, I18nConfig, LanguageSwitcher, LayoutConfig, MetaConfig, Section,
    SectionKind, UiConfig,
};
pub use doc::path::{at, at_str, first_value};
pub use doc::sanitize::clean_text;
pub use foundation::error::{VitaeError, VitaeResult};
pub use i18n::localizer::Localizer;
pub use render::html::{esc, join_parts};
pub use render::page::{
    DEFAULT_REFERENCE_LIMIT, LANGUAGE_SWITCHER_SLOT, NavLink, NavObserver, PageController,
    PageState, RenderedPage, static_shell,
};
pub use render::video::{EMBED_BASE, EmbedFlags, embed_url, extract_video_id};
