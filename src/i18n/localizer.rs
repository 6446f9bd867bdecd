use std::collections::BTreeMap;

use serde_json::Value;

use crate::doc::model::Fields;
use crate::doc::sanitize::clean_text;
use crate::i18n::table;

/// Resolves display strings for one (document, active language) pair.
///
/// Two translation strategies coexist and the caller never knows which one a
/// document uses: structured per-document string tables (`i18n.strings`,
/// good for UI labels) and inline per-field suffixed overrides
/// (`title_de` next to `title`, convenient for item content). The resolver
/// prefers the more specific source and always falls back rather than fail.
#[derive(Clone, Copy, Debug)]
pub struct Localizer<'a> {
    strings: &'a BTreeMap<String, BTreeMap<String, String>>,
    lang: &'a str,
    default_lang: &'a str,
}

impl<'a> Localizer<'a> {
    /// Build a localizer over the document string tables.
    pub fn new(
        strings: &'a BTreeMap<String, BTreeMap<String, String>>,
        lang: &'a str,
        default_lang: &'a str,
    ) -> Self {
        Self {
            strings,
            lang,
            default_lang,
        }
    }

    /// Active language code.
    pub fn lang(&self) -> &'a str {
        self.lang
    }

    /// Whether the active language is the document default (unsuffixed
    /// fields are authored in the default language).
    pub fn is_default_lang(&self) -> bool {
        self.lang == self.default_lang
    }

    /// Translate a key: document table -> built-in table -> `fallback`.
    ///
    /// The result is always whitespace-normalized.
    pub fn translate(&self, key: &str, fallback: &str) -> String {
        let resolved = self
            .strings
            .get(self.lang)
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .or_else(|| table::builtin(self.lang, key))
            .unwrap_or(fallback);
        clean_text(resolved)
    }

    /// Resolve a localized field on an item.
    ///
    /// If the active language is non-default and `<name>_<lang>` is present
    /// and non-null, that variant wins; otherwise the base field, if
    /// non-null. An empty string is a present value; only null or absent
    /// fields fall through to `None`.
    pub fn localize_field<'v>(&self, item: &'v Fields, name: &str) -> Option<&'v Value> {
        if !self.is_default_lang() {
            let suffixed = format!("{name}_{}", self.lang);
            if let Some(v) = item.get(&suffixed)
                && !v.is_null()
            {
                return Some(v);
            }
        }
        item.get(name).filter(|v| !v.is_null())
    }

    /// [`Self::localize_field`] narrowed to strings, whitespace-normalized,
    /// with a caller-supplied literal fallback.
    pub fn field_str(&self, item: &Fields, name: &str, fallback: &str) -> String {
        match self.localize_field(item, name) {
            Some(Value::String(s)) => clean_text(s),
            // Numeric leaves (years, counts) display as-is.
            Some(Value::Number(n)) => n.to_string(),
            _ => clean_text(fallback),
        }
    }

    /// Localized string list field (e.g. skills, responsibilities).
    ///
    /// Non-string entries are skipped; a missing field yields an empty list.
    pub fn field_list(&self, item: &Fields, name: &str) -> Vec<String> {
        match self.localize_field(item, name) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_str)
                .map(clean_text)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/i18n/localizer.rs"]
mod tests;
