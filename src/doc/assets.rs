use std::borrow::Cow;

use serde_json::Value;

use crate::doc::path::at_str;

/// Sentinel prefix marking a symbolic asset token.
pub const ASSET_PREFIX: &str = "@";

/// Resolve a symbolic asset token against the document asset map.
///
/// Tokens that do not start with [`ASSET_PREFIX`] are treated as literal
/// URLs and returned unchanged. A token such as `@images.profile` is split
/// on `.` and walked through `assets` via [`at_str`]; if any segment is
/// missing, or the leaf is not a string, the token resolves to the empty
/// string. Never errors.
pub fn resolve_asset<'a>(token: &'a str, assets: &Value) -> Cow<'a, str> {
    let Some(rest) = token.strip_prefix(ASSET_PREFIX) else {
        return Cow::Borrowed(token);
    };
    let path: Vec<&str> = rest.split('.').collect();
    match at_str(assets, &path) {
        Some(url) => Cow::Owned(url.to_owned()),
        None => Cow::Borrowed(""),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/doc/assets.rs"]
mod tests;
