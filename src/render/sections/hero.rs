use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::doc::path::first_value;
use crate::doc::sanitize::clean_text;
use crate::i18n::localizer::Localizer;
use crate::render::html::Html;
use crate::render::sections::RenderCtx;
use crate::render::video::{EmbedFlags, embed_url, extract_video_id};

/// Hero banner: headline, subheadline, and an optional background video.
///
/// Documents have gone through several hero shapes; both the nested
/// (`left.headline`) and the flat (`header`, `title`) key schemes are
/// accepted, on the section body first and `layout.hero` second. A video
/// URL without an extractable id renders a textual placeholder; this path
/// must never fail, whatever the URL looks like.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let layout_hero = &ctx.index.document().layout.hero;
    let sources = [&section.body, layout_hero];

    let headline = resolve_line(
        &ctx.loc,
        &sources,
        ("left", "headline"),
        &["headline", "header", "title"],
    )
    .unwrap_or_else(|| ctx.section_title(section));
    let subheadline = resolve_line(
        &ctx.loc,
        &sources,
        ("left", "subheadline"),
        &["subheadline", "subheader", "subtitle"],
    );

    let mut w = Html::new();
    w.push("<div class=\"hero-inner\"><h1 data-slot=\"hero-headline\">");
    w.text(&headline);
    w.push("</h1>");
    if let Some(sub) = subheadline {
        w.push("<p data-slot=\"hero-subheadline\">");
        w.text(&sub);
        w.push("</p>");
    }
    render_video(&mut w, ctx, &sources);
    w.push("</div>");
    w.finish()
}

/// One localized display line resolved through the legacy key fallbacks:
/// nested `<group>.<name>` first, then each flat key in order, per source.
fn resolve_line(
    loc: &Localizer<'_>,
    sources: &[&Fields],
    nested: (&str, &str),
    flats: &[&str],
) -> Option<String> {
    for body in sources {
        let in_group = body
            .get(nested.0)
            .and_then(Value::as_object)
            .and_then(|group| loc.localize_field(group, nested.1));
        let candidates =
            std::iter::once(in_group).chain(flats.iter().map(|name| loc.localize_field(body, name)));
        if let Some(s) = first_value(candidates).and_then(Value::as_str) {
            return Some(clean_text(s));
        }
    }
    None
}

fn render_video(w: &mut Html, ctx: &RenderCtx<'_>, sources: &[&Fields]) {
    let Some(config) = sources
        .iter()
        .find_map(|body| body.get("video").and_then(Value::as_object))
    else {
        return;
    };
    let Some(raw_url) = config.get("url").and_then(Value::as_str) else {
        return;
    };
    let url = ctx.asset_url(raw_url);

    w.push("<div class=\"hero-video\" data-slot=\"hero-video\">");
    match extract_video_id(&url) {
        Some(id) => {
            let src = embed_url(id, EmbedFlags::from_fields(config));
            w.push("<iframe");
            w.attr("src", &src);
            w.attr("allow", "autoplay; fullscreen");
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
#[path = "../../../tests/unit/render/sections/hero.rs"]
mod tests;
