//! Minimal deterministic HTML writer.
//!
//! Renderers assemble fragments by pushing escaped text into a buffer in a
//! fixed order; same input, identical bytes. No templating engine, no IO.

/// Escape a string for use in HTML text content or attribute values.
pub fn esc(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Push-order HTML buffer.
pub(crate) struct Html {
    buf: String,
}

impl Html {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    /// Append a raw (already escaped or static) fragment.
    pub(crate) fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append escaped text content.
    pub(crate) fn text(&mut self, s: &str) {
        self.buf.push_str(&esc(s));
    }

    /// Append an escaped attribute: ` name="value"`.
    pub(crate) fn attr(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&esc(value));
        self.buf.push('"');
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Join non-empty parts with a separator, skipping blanks.
///
/// Used for meta lines like `dates · location · work mode` where any part
/// may be absent.
pub fn join_parts(parts: &[String], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
