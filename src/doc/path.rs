use serde_json::Value;

/// Null-safe nested lookup into a document tree.
///
/// Walks `root` one segment at a time, through objects by key and through
/// arrays by numeric index. Returns `None` as soon as any intermediate value
/// is absent; never panics on unexpected shapes.
pub fn at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for seg in path {
        cur = match cur {
            Value::Object(map) => map.get(*seg)?,
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if cur.is_null() {
            return None;
        }
    }
    Some(cur)
}

/// [`at`] narrowed to string leaves.
pub fn at_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    at(root, path).and_then(Value::as_str)
}

/// First non-null value from an ordered list of candidate sources.
///
/// The explicit form of the fallback chains used throughout the renderers:
/// earlier sources win, `Null` counts as absent, an empty string counts as
/// present.
pub fn first_value<'a>(
    candidates: impl IntoIterator<Item = Option<&'a Value>>,
) -> Option<&'a Value> {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
}

#[cfg(test)]
#[path = "../../tests/unit/doc/path.rs"]
mod tests;
