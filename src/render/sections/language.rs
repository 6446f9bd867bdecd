use crate::render::html::Html;
use crate::render::sections::RenderCtx;

/// Language switcher: one button per available language, the active one
/// marked. Rendered from UI config rather than a document section.
pub(crate) fn render(ctx: &RenderCtx<'_>) -> String {
    let mut w = Html::new();
    w.push("<div class=\"lang-switch\" data-slot=\"language-switcher\">");
    for lang in ctx.index.available_languages() {
        let active = lang == ctx.loc.lang();
        w.push("<button");
        w.attr("class", if active { "lang-btn is-active" } else { "lang-btn" });
        w.attr("data-lang", lang);
        w.push(">");
        w.text(&lang.to_uppercase());
        w.push("</button>");
    }
    w.push("</div>");
    w.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/language.rs"]
mod tests;
