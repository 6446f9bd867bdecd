use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::doc::sanitize::clean_text;
use crate::render::html::Html;
use crate::render::sections::{RenderCtx, items};

/// About block: columns located by their `component` discriminator.
///
/// Columns are found by name (`profile_picture`, `about`, `skills`), not by
/// array position, so a reordered or omitted column degrades gracefully: no
/// photo simply means no figure in the output.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let columns = items(&section.body, "columns");

    let mut w = Html::new();
    w.push("<div class=\"about-columns\">");
    if let Some(col) = column(columns, "profile_picture") {
        render_picture(&mut w, ctx, col);
    }
    if let Some(col) = column(columns, "about") {
        render_text(&mut w, ctx, col);
    }
    if let Some(col) = column(columns, "skills") {
        render_skills(&mut w, ctx, col);
    }
    w.push("</div>");
    w.finish()
}

fn column<'a>(columns: &'a [Value], component: &str) -> Option<&'a Fields> {
    columns
        .iter()
        .filter_map(Value::as_object)
        .find(|col| col.get("component").and_then(Value::as_str) == Some(component))
}

fn render_picture(w: &mut Html, ctx: &RenderCtx<'_>, col: &Fields) {
    let Some(token) = col.get("image").and_then(Value::as_str) else {
        return;
    };
    let url = ctx.asset_url(token);
    if url.is_empty() {
        return;
    }
    w.push("<figure class=\"about-photo\"><img");
    w.attr("src", &url);
    w.attr("alt", &ctx.loc.field_str(col, "alt", ""));
    w.push("></figure>");
}

fn render_text(w: &mut Html, ctx: &RenderCtx<'_>, col: &Fields) {
    w.push("<div class=\"about-text\" data-slot=\"about-text\">");
    let lead = ctx.loc.field_str(col, "lead", "");
    if !lead.is_empty() {
        w.push("<p class=\"lead\">");
        w.text(&lead);
        w.push("</p>");
    }
    if let Some(raw) = ctx.loc.localize_field(col, "text").and_then(Value::as_str) {
        // Authored text uses newlines as paragraph breaks.
        w.push("<p>");
        let mut first = true;
        for line in raw.split('\n').map(clean_text).filter(|l| !l.is_empty()) {
            if !first {
                w.push("<br/>");
            }
            w.text(&line);
            first = false;
        }
        w.push("</p>");
    }
    w.push("</div>");
}

fn render_skills(w: &mut Html, ctx: &RenderCtx<'_>, col: &Fields) {
    let skills = ctx.loc.field_list(col, "items");
    if skills.is_empty() {
        return;
    }
    w.push("<ul class=\"skill-tags\" data-slot=\"about-skills\">");
    for skill in skills {
        w.push("<li class=\"tag\">");
        w.text(&skill);
        w.push("</li>");
    }
    w.push("</ul>");
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/about.rs"]
mod tests;
