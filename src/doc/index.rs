use std::collections::BTreeMap;

use crate::doc::model::{ContentDocument, Section};
use crate::foundation::error::VitaeResult;

/// Hard-coded last-resort language when neither the switcher nor the
/// document metadata name one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Parse-once view over a [`ContentDocument`] with sections indexed by id.
///
/// The index is built a single time per page lifetime; the underlying
/// document is never mutated afterwards. Mutable presentation state lives in
/// [`crate::PageState`], not here.
#[derive(Clone, Debug)]
pub struct ContentIndex {
    doc: ContentDocument,
    by_id: BTreeMap<String, usize>,
}

impl ContentIndex {
    /// Parse the serialized content blob and index its sections.
    ///
    /// Malformed input is logged and returned as an error; the caller is
    /// expected to stop rendering and leave only static markup.
    #[tracing::instrument(skip(blob))]
    pub fn load(blob: &str) -> VitaeResult<Self> {
        match ContentDocument::from_json(blob) {
            Ok(doc) => Ok(Self::from_document(doc)),
            Err(err) => {
                tracing::error!(%err, "content document rejected");
                Err(err)
            }
        }
    }

    /// Index an already-parsed document.
    pub fn from_document(doc: ContentDocument) -> Self {
        let mut by_id = BTreeMap::new();
        for (i, section) in doc.sections.iter().enumerate() {
            by_id.entry(section.id.clone()).or_insert(i);
        }
        Self { doc, by_id }
    }

    /// The underlying document.
    pub fn document(&self) -> &ContentDocument {
        &self.doc
    }

    /// O(1) section lookup by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.by_id.get(id).map(|&i| &self.doc.sections[i])
    }

    /// Initial active language: switcher default, then document metadata
    /// language, then [`FALLBACK_LANGUAGE`].
    pub fn initial_language(&self) -> &str {
        self.doc
            .ui
            .language_switcher
            .as_ref()
            .and_then(|s| s.default.as_deref())
            .or(self.doc.meta.language.as_deref())
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    /// Language the unsuffixed content fields are authored in.
    pub fn default_language(&self) -> &str {
        self.doc
            .meta
            .language
            .as_deref()
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    /// Languages offered by the switcher, or just the default when the
    /// document offers none.
    pub fn available_languages(&self) -> Vec<&str> {
        match &self.doc.ui.language_switcher {
            Some(s) if !s.available.is_empty() => {
                s.available.iter().map(String::as_str).collect()
            }
            _ => vec![self.initial_language()],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/doc/index.rs"]
mod tests;
