use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::doc::path::first_value;
use crate::doc::sanitize::clean_text;
use crate::render::html::Html;
use crate::render::sections::{RenderCtx, as_fields, items};
use crate::render::video::{EmbedFlags, embed_url, extract_video_id};

/// Project highlight cards, each with an optional embedded video.
///
/// Video id extraction works exactly as in the hero; a URL without a 6+
/// digit run yields the placeholder card body instead of an embed.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let mut w = Html::new();
    w.push("<div class=\"project-grid\" data-slot=\"project-items\">");
    for entry in items(&section.body, "items").iter().filter_map(as_fields) {
        render_item(&mut w, ctx, entry);
    }
    w.push("</div>");
    w.finish()
}

fn render_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let title = ctx.loc.field_str(item, "title", "");
    // Older documents carry the card body under "text".
    let description = first_value([
        ctx.loc.localize_field(item, "description"),
        ctx.loc.localize_field(item, "text"),
    ])
    .and_then(Value::as_str)
    .map(clean_text)
    .unwrap_or_default();

    w.push("<article class=\"project-card\">");
    if !title.is_empty() {
        w.push("<h5>");
        w.text(&title);
        w.push("</h5>");
    }
    if !description.is_empty() {
        w.push("<p>");
        w.text(&description);
        w.push("</p>");
    }
    render_video(w, ctx, item);
    w.push("</article>");
}

fn render_video(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let nested = item.get("video").and_then(Value::as_object);
    let raw_url = first_value([nested.and_then(|v| v.get("url")), item.get("video_url")])
        .and_then(Value::as_str);
    let Some(raw_url) = raw_url else {
        return;
    };
    let url = ctx.asset_url(raw_url);

    w.push("<div class=\"project-video\">");
    match extract_video_id(&url) {
        Some(id) => {
            let flags = nested.map(EmbedFlags::from_fields).unwrap_or_default();
            w.push("<iframe");
            w.attr("src", &embed_url(id, flags));
            w.attr("allow", "fullscreen");
            w.attr("loading", "lazy");
            w.push("></iframe>");
        }
        None => {
            w.push("<p class=\"video-placeholder\">");
            w.text(&ctx.loc.translate("hero.video_unavailable", "Video unavailable"));
            w.push("</p>");
        }
    }
    w.push("</div>");
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/projects.rs"]
mod tests;
