//! Project detail page.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::component::RenderContext;
use super::document::{wrap, Document};
use crate::content::Project;

/// The single section of the detail page.
pub const DETAIL: &str = "project";

const MARGIN: usize = 2;

/// Lays out the detail page of `project`.
#[must_use]
pub fn compose(ctx: &RenderContext<'_>, project: &Project, width: usize, header_rows: usize) -> Document {
    let palette = ctx.palette;
    let labels = ctx.labels;
    let text_width = width.saturating_sub(MARGIN * 2).max(1);
    let pad = " ".repeat(MARGIN);
    let body = Style::default().fg(palette.text);
    let label_style = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);

    let mut doc = Document::new();
    doc.section(DETAIL, true);
    for _ in 0..header_rows {
        doc.blank();
    }

    doc.push(Line::from(Span::styled(
        format!("{pad}← {} (Esc)", labels.t("detail", "back")),
        Style::default().fg(palette.text_muted),
    )));
    doc.blank();
    doc.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(
            format!(" {} ", project.category.label()),
            Style::default().fg(palette.background).bg(palette.accent),
        ),
    ]));
    doc.push(Line::from(Span::styled(
        format!("{pad}{}", labels.t("projects", &project.title_key())),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    for row in wrap(&labels.t("projects", &project.description_key()), text_width) {
        doc.push(Line::from(Span::styled(
            format!("{pad}{row}"),
            Style::default().fg(palette.text_secondary),
        )));
    }
    doc.blank();

    doc.push(Line::from(Span::styled(
        format!("{pad}{}", labels.t("detail", "about_project")),
        label_style,
    )));
    for row in wrap(&labels.t("projects", &project.long_description_key()), text_width) {
        doc.push(Line::from(Span::styled(format!("{pad}{row}"), body)));
    }
    doc.blank();

    doc.push(Line::from(Span::styled(
        format!("{pad}{}", labels.t("detail", "technologies")),
        label_style,
    )));
    let mut tags = vec![Span::raw(pad.clone())];
    for tag in project.tags {
        let (r, g, b) = tag.color;
        tags.push(Span::styled(
            format!("● {} ", tag.name),
            Style::default().fg(Color::Rgb(r, g, b)),
        ));
    }
    doc.push(Line::from(tags));
    doc.blank();

    let links = [
        ("view_live", project.links.preview),
        ("view_code", project.links.code),
        ("view_design", project.links.design),
    ];
    if links.iter().any(|(_, url)| url.is_some()) {
        doc.push(Line::from(Span::styled(
            format!("{pad}{}", labels.t("detail", "links")),
            label_style,
        )));
        for (key, url) in links {
            if let Some(url) = url {
                doc.push(Line::from(vec![
                    Span::styled(format!("{pad}{}: ", labels.t("detail", key)), body),
                    Span::styled(url, Style::default().fg(palette.accent)),
                ]));
            }
        }
        doc.blank();
    }

    let credited: Vec<_> = project.credited().collect();
    if !credited.is_empty() {
        doc.push(Line::from(Span::styled(
            format!("{pad}{}", labels.t("detail", "contributors")),
            label_style,
        )));
        for person in credited {
            doc.push(Line::from(vec![
                Span::styled(format!("{pad}{}", person.name), body),
                Span::styled(
                    format!("  @{}", person.handle),
                    Style::default().fg(palette.text_muted),
                ),
            ]));
        }
        doc.blank();
    }

    doc
}
