use serde_json::Value;

use crate::doc::model::{Fields, Section};
use crate::i18n::table::{AWARD_KEYWORDS, EDUCATION_KEYWORDS, PUBLICATION_KEYWORDS};
use crate::render::html::{Html, join_parts};
use crate::render::sections::{RenderCtx, as_fields, items};

/// Education, publications, and awards.
///
/// Two document shapes are accepted and must render identically:
/// - grouped: `groups: [{group_title, items}]`, each group classified by a
///   case-insensitive substring match of its localized title against the
///   en/de keyword sets;
/// - legacy flat: `items` on the section itself, with sibling
///   `publications` / `awards` sections supplying the other groups.
pub(crate) fn render(section: &Section, ctx: &RenderCtx<'_>) -> String {
    let mut w = Html::new();
    w.push("<div class=\"education-groups\" data-slot=\"education-items\">");
    for group in collect_groups(section, ctx) {
        render_group(&mut w, ctx, &group);
    }
    w.push("</div>");
    w.finish()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupKind {
    Education,
    Publications,
    Awards,
}

impl GroupKind {
    fn heading(self, ctx: &RenderCtx<'_>) -> String {
        let (key, fallback) = match self {
            GroupKind::Education => ("sections.education.title", "Education"),
            GroupKind::Publications => ("sections.publications.title", "Publications"),
            GroupKind::Awards => ("sections.awards.title", "Awards"),
        };
        ctx.loc.translate(key, fallback)
    }
}

struct Group<'a> {
    kind: Option<GroupKind>,
    /// Heading used when the group title matches no keyword set.
    raw_title: String,
    items: Vec<&'a Fields>,
}

/// Classify a localized group title by keyword substring, both languages.
fn classify(title: &str) -> Option<GroupKind> {
    let lower = title.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    if matches(EDUCATION_KEYWORDS) {
        Some(GroupKind::Education)
    } else if matches(PUBLICATION_KEYWORDS) {
        Some(GroupKind::Publications)
    } else if matches(AWARD_KEYWORDS) {
        Some(GroupKind::Awards)
    } else {
        None
    }
}

fn collect_groups<'a>(section: &'a Section, ctx: &RenderCtx<'a>) -> Vec<Group<'a>> {
    let groups = items(&section.body, "groups");
    if !groups.is_empty() {
        return groups
            .iter()
            .filter_map(as_fields)
            .map(|g| {
                let title = ctx.loc.field_str(g, "group_title", "");
                Group {
                    kind: classify(&title),
                    raw_title: title,
                    items: items(g, "items").iter().filter_map(as_fields).collect(),
                }
            })
            .collect();
    }

    // Legacy flat shape: section items plus sibling sections.
    let mut out = vec![Group {
        kind: Some(GroupKind::Education),
        raw_title: String::new(),
        items: items(&section.body, "items")
            .iter()
            .filter_map(as_fields)
            .collect(),
    }];
    for (id, kind) in [
        ("publications", GroupKind::Publications),
        ("awards", GroupKind::Awards),
    ] {
        if let Some(sibling) = ctx.index.section(id) {
            out.push(Group {
                kind: Some(kind),
                raw_title: String::new(),
                items: items(&sibling.body, "items")
                    .iter()
                    .filter_map(as_fields)
                    .collect(),
            });
        }
    }
    out.retain(|g| !g.items.is_empty());
    out
}

fn render_group(w: &mut Html, ctx: &RenderCtx<'_>, group: &Group<'_>) {
    if group.items.is_empty() {
        return;
    }
    let heading = match group.kind {
        Some(kind) => kind.heading(ctx),
        None => group.raw_title.clone(),
    };
    w.push("<div class=\"edu-group\"><h4>");
    w.text(&heading);
    w.push("</h4>");
    for &item in &group.items {
        match group.kind {
            Some(GroupKind::Education) | None => render_education_item(w, ctx, item),
            Some(GroupKind::Publications) => render_publication_item(w, ctx, item),
            Some(GroupKind::Awards) => render_award_item(w, ctx, item),
        }
    }
    w.push("</div>");
}

fn render_education_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let loc = &ctx.loc;
    w.push("<article class=\"card edu-item\"><div class=\"fw-semibold\">");
    w.text(&loc.field_str(item, "institution", &loc.field_str(item, "title", "")));
    w.push("</div>");
    let detail = join_parts(
        &[
            loc.field_str(item, "degree", ""),
            loc.field_str(item, "field", ""),
        ],
        ", ",
    );
    if !detail.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&detail);
        w.push("</div>");
    }
    let dates = loc.field_str(item, "dates", "");
    if !dates.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&dates);
        w.push("</div>");
    }
    let thesis = loc.field_str(item, "thesis", "");
    if !thesis.is_empty() {
        w.push("<div><span class=\"fw-semibold\">");
        w.text(&loc.translate("education.thesis", "Thesis"));
        w.push(":</span> ");
        w.text(&thesis);
        w.push("</div>");
    }
    w.push("</article>");
}

fn render_publication_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let loc = &ctx.loc;
    let title = loc.field_str(item, "title", "");
    let meta = join_parts(
        &[
            loc.field_str(item, "venue", ""),
            loc.field_str(item, "year", ""),
        ],
        " · ",
    );
    w.push("<article class=\"card pub-item\">");
    match item.get("url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => {
            w.push("<a");
            w.attr("href", &ctx.asset_url(url));
            w.push(">");
            w.text(&title);
            w.push("</a>");
        }
        _ => {
            w.push("<div class=\"fw-semibold\">");
            w.text(&title);
            w.push("</div>");
        }
    }
    if !meta.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&meta);
        w.push("</div>");
    }
    w.push("</article>");
}

fn render_award_item(w: &mut Html, ctx: &RenderCtx<'_>, item: &Fields) {
    let loc = &ctx.loc;
    w.push("<article class=\"card award-item\"><div class=\"fw-semibold\">");
    w.text(&loc.field_str(item, "title", ""));
    w.push("</div>");
    let meta = join_parts(
        &[
            loc.field_str(item, "issuer", ""),
            loc.field_str(item, "year", ""),
        ],
        " · ",
    );
    if !meta.is_empty() {
        w.push("<div class=\"muted\">");
        w.text(&meta);
        w.push("</div>");
    }
    w.push("</article>");
}

#[cfg(test)]
#[path = "../../../tests/unit/render/sections/education.rs"]
mod tests;
