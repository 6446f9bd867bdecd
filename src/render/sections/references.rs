use crate::doc::model::{Fields, Section};
use crate::render::html::{Html, join_parts};
use crate::render::sections::{RenderCtx, as_fields, items};

/// Reference quotes with a display limit.
///
/// All items are rendered; cards beyond the limit are marked hidden unless
/// the shared references-expanded flag is set. The expand/collapse control
/// is omitted entirely when the item count does not exceed the limit.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let entries: Vec<&Fields> = items(&section.body, "items")
        .iter()
        .filter_map(as_fields)
        .collect();
    let limit = ctx.state.reference_limit;
    let expanded = ctx.state.references_expanded;

    let mut w = Html::new();
    w.push("<div class=\"ref-list\" data-slot=\"reference-items\">");
    for (idx, &item) in entries.iter().enumerate() {
        let hidden = !expanded && idx >= limit;
        render_item(&mut w, ctx, item, hidden);
    }
    w.push("</div>");

    if entries.len() > limit {
        let (action, key, fallback) = if expanded {
            ("collapse-references", "references.show_less", "Show less")
        } else {
            ("expand-references", "references.show_more", "Show more")
        };
        w.push("<button class=\"ref-toggle\"");
        w.attr("data-action", action);
        w.push(">");
        w.text(&ctx.loc.translate(key, fallback));
        w.push("</button>");
    }
    w.finish()
}

fn render_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields, hidden: bool) {
    let loc = &ctx.loc;
    w.push("<article");
    w.attr("class", if hidden { "ref-card hidden" } else { "ref-card" });
    w.push("><div class=\"fw-semibold\">");
    w.text(&loc.field_str(item, "name", ""));
    w.push("</div>");
    let meta = join_parts(
        &[
            loc.field_str(item, "title", ""),
            loc.field_str(item, "date", ""),
            loc.field_str(item, "relation_detail", ""),
        ],
        " · ",
    );
    if !meta.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&meta);
        w.push("</div>");
    }
    let text = loc.field_str(item, "text", "");
    if !text.is_empty() {
        w.push("<blockquote class=\"quote\">");
        w.text(&text);
        w.push("</blockquote>");
    }
    w.push("</article>");
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/references.rs"]
mod tests;
