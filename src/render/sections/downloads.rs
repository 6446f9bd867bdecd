use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::doc::path::first_value;
use crate::render::html::Html;
use crate::render::sections::{RenderCtx, as_fields, items};

/// CV download entries.
///
/// A download button is rendered only when the item carries a resolvable
/// URL; otherwise an "available on request" line takes its place. Never a
/// broken link.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let mut w = Html::new();
    w.push("<div class=\"download-list\" data-slot=\"download-items\">");
    for item in items(&section.body, "items").iter().filter_map(as_fields) {
        render_item(&mut w, ctx, item);
    }
    w.push("</div>");
    w.finish()
}

fn render_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let label = ctx
        .loc
        .field_str(item, "label", &ctx.loc.field_str(item, "title", ""));
    let url = first_value([item.get("url"), item.get("file")])
        .and_then(Value::as_str)
        .map(|token| ctx.asset_url(token))
        .unwrap_or_default();

    w.push("<div class=\"download-item\">");
    if !label.is_empty() {
        w.push("<span class=\"download-label\">");
        w.text(&label);
        w.push("</span>");
    }
    if url.is_empty() {
        w.push("<span class=\"muted\">");
        w.text(&ctx.loc.translate("downloads.on_request", "Available on request"));
        w.push("</span>");
    } else {
        w.push("<a class=\"btn\" download");
        w.attr("href", &url);
        w.push(">");
        w.text(&ctx.loc.translate("downloads.download", "Download"));
        w.push("</a>");
    }
    w.push("</div>");
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/downloads.rs"]
mod tests;
