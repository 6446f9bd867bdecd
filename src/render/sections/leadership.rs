use crate::doc::model::Section;
use crate::render::html::Html;
use crate::render::sections::{RenderCtx, as_fields, items};

/// Leadership principle cards: `sections: [{icon, title, text}]`.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let mut w = Html::new();
    w.push("<div class=\"leadership-cards\" data-slot=\"leadership-items\">");
    for card in items(&section.body, "sections").iter().filter_map(as_fields) {
        let title = ctx.loc.field_str(card, "title", "");
        let text = ctx.loc.field_str(card, "text", "");
        if title.is_empty() && text.is_empty() {
            continue;
        }
        w.push("<article class=\"card\">");
        if let Some(icon) = card.get("icon").and_then(|v| v.as_str()) {
            w.push("<i");
            w.attr("class", icon);
            w.attr("aria-hidden", "true");
            w.push("></i>");
        }
        if !title.is_empty() {
            w.push("<h5>");
            w.text(&title);
            w.push("</h5>");
        }
        if !text.is_empty() {
            w.push("<p>");
            w.text(&text);
            w.push("</p>");
        }
        w.push("</article>");
    }
    w.push("</div>");
    w.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/leadership.rs"]
mod tests;
