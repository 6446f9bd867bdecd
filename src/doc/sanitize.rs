/// Normalize whitespace in a free-text string before display.
///
/// Collapses every run of whitespace (including newlines from authored
/// multi-line JSON strings) to a single space and trims both ends.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_ws = true; // leading whitespace is dropped
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/doc/sanitize.rs"]
mod tests;
