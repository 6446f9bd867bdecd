use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::render::html::{Html, join_parts};
use crate::render::sections::{RenderCtx, as_fields, items};

/// Experience timeline.
///
/// Each item renders a header (`company — role`), a meta line joining
/// dates, location, work mode, and employment type with " · " (blank parts
/// skipped), localized skill pills, and a collapsible details block with
/// responsibilities and key results. Items with neither list show an
/// optional note instead and get no details control. Bulk expand/collapse
/// controls sit above the list; the active filter query hides non-matching
/// cards.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let entries = items(&section.body, "items");

    let mut w = Html::new();
    if !entries.is_empty() {
        render_controls(&mut w, ctx);
    }
    w.push("<div class=\"timeline\" data-slot=\"experience-items\">");
    for (idx, entry) in entries.iter().filter_map(as_fields).enumerate() {
        render_item(&mut w, ctx, entry, idx);
    }
    w.push("</div>");
    w.finish()
}

fn render_controls(w: &mut Html, ctx: &RenderCtx<'_>) {
    w.push("<div class=\"exp-controls\"><button");
    w.attr("data-action", "expand-all");
    w.push(">");
    w.text(&ctx.loc.translate("experience.expand_all", "Expand all"));
    w.push("</button><button");
    w.attr("data-action", "collapse-all");
    w.push(">");
    w.text(&ctx.loc.translate("experience.collapse_all", "Collapse all"));
    w.push("</button></div>");
}

fn render_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields, idx: usize) {
    let loc = &ctx.loc;
    let company = loc.field_str(item, "company", "");
    let role = loc.field_str(item, "position", &loc.field_str(item, "role", ""));
    let meta = join_parts(
        &[
            loc.field_str(item, "dates", ""),
            loc.field_str(item, "location", ""),
            loc.field_str(item, "work_mode", ""),
            loc.field_str(item, "employment_type", ""),
        ],
        " · ",
    );
    let skills = loc.field_list(item, "skills");
    let responsibilities = loc.field_list(item, "responsibilities");
    let key_results = loc.field_list(item, "key_results");

    let mut class = String::from("t-item");
    if is_filtered_out(ctx, item, &company, &role, &meta) {
        class.push_str(" hidden");
    }

    w.push("<article");
    w.attr("class", &class);
    w.attr("id", &format!("job{idx}"));
    w.push("><header><h5>");
    w.text(&join_parts(&[company, role], " — "));
    w.push("</h5>");
    if !meta.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&meta);
        w.push("</div>");
    }
    w.push("</header>");

    if !skills.is_empty() {
        w.push("<ul class=\"pills\">");
        for skill in &skills {
            w.push("<li class=\"pill\">");
            w.text(skill);
            w.push("</li>");
        }
        w.push("</ul>");
    }

    if responsibilities.is_empty() && key_results.is_empty() {
        let note = loc.field_str(item, "note", "");
        if !note.is_empty() {
            w.push("<p class=\"note\">");
            w.text(&note);
            w.push("</p>");
        }
    } else {
        w.push("<details class=\"exp-details\"");
        if ctx.state.experience_expanded {
            w.push(" open");
        }
        w.push("><summary>");
        w.text(&loc.translate("experience.details", "Details"));
        w.push("</summary>");
        render_list(w, ctx, "experience.responsibilities", "Responsibilities", &responsibilities);
        render_list(w, ctx, "experience.key_results", "Key Results", &key_results);
        w.push("</details>");
    }
    w.push("</article>");
}

fn render_list(w: &mut Html, ctx: &RenderCtx<'_>, key: &str, fallback: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    w.push("<div class=\"fw-semibold\">");
    w.text(&ctx.loc.translate(key, fallback));
    w.push("</div><ul>");
    for line in lines {
        w.push("<li>");
        w.text(line);
        w.push("</li>");
    }
    w.push("</ul>");
}

/// Substring filter over the card's visible text, case-insensitive.
fn is_filtered_out(
    ctx: &RenderCtx<'_>,
    item: &Fields,
    company: &str,
    role: &str,
    meta: &str,
) -> bool {
    let Some(query) = ctx.state.experience_filter.as_deref() else {
        return false;
    };
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return false;
    }
    let mut haystack = format!("{company} {role} {meta}").to_lowercase();
    for name in ["skills", "responsibilities", "key_results", "note"] {
        if let Some(v) = ctx.loc.localize_field(item, name) {
            match v {
                Value::String(s) => {
                    haystack.push(' ');
                    haystack.push_str(&s.to_lowercase());
                }
                Value::Array(entries) => {
                    for s in entries.iter().filter_map(Value::as_str) {
                        haystack.push(' ');
                        haystack.push_str(&s.to_lowercase());
                    }
                }
                _ => {}
            }
        }
    }
    !haystack.contains(&query)
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/experience.rs"]
mod tests;
