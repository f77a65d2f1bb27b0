//! The listing page: hero, about me, work timeline, portfolio, collaborators
//! and footer, stacked into one scrolling document.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

use super::component::RenderContext;
use super::document::{center, wrap, Document};
use super::theme::{Backdrop, CardGlow};
use crate::branding::{copyright_line, CONTACT_LINKS, OWNER_NAME, RESUME_URL};
use crate::content::{CONTRIBUTORS, PROJECTS, WORK_EXPERIENCE};

/// Banner section.
pub const HERO: &str = "hero";
/// Biography section.
pub const ABOUT_ME: &str = "about-me";
/// Project showcase section.
pub const PORTFOLIO: &str = "portfolio";
/// Work timeline section.
pub const WORK_EXPERIENCE_SECTION: &str = "work-experience";
/// Collaborators section.
pub const COLLABORATORS: &str = "collaborators";
/// Footer section.
pub const FOOTER: &str = "footer";

/// Header links: fragment and label key under `header`.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#hero", "home"),
    ("#about-me", "about"),
    ("#portfolio", "projects"),
];

/// Number of rotating hero titles (`home.title_1` to `home.title_6`).
pub const HERO_TITLE_COUNT: usize = 6;

/// Time each hero title stays up.
pub const HERO_ROTATION_INTERVAL: Duration = Duration::from_secs(3);

const IBM_BLUE: Color = Color::Rgb(15, 98, 254);

/// Which hero title is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRotation {
    index: usize,
    shown_at: Instant,
}

impl HeroRotation {
    /// Starts at the first title.
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            index: 0,
            shown_at: now,
        }
    }

    /// Zero-based index of the current title.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Label key of the current title.
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("title_{}", self.index + 1)
    }

    /// Advances when the interval has elapsed. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.shown_at) < HERO_ROTATION_INTERVAL {
            return false;
        }
        self.index = (self.index + 1) % HERO_TITLE_COUNT;
        self.shown_at = now;
        true
    }
}

/// Everything the listing page depends on besides labels and colors.
#[derive(Debug, Clone, Copy)]
pub struct HomeParams {
    /// Current hero title
    pub hero_title: usize,
    /// Selected project card
    pub selected: usize,
    /// Hero background
    pub backdrop: Backdrop,
    /// Interview card frame
    pub glow: CardGlow,
    /// Year shown in the footer
    pub year: i32,
    /// Columns available
    pub width: usize,
    /// Rows of the visible page; the hero fills exactly one screen
    pub viewport_rows: usize,
    /// Rows hidden under the header
    pub header_rows: usize,
}

const MARGIN: usize = 2;

fn text_width(params: &HomeParams) -> usize {
    params.width.saturating_sub(MARGIN * 2).max(1)
}

fn paragraph(doc: &mut Document, text: &str, width: usize, indent: usize, style: Style) {
    let pad = " ".repeat(MARGIN + indent);
    for row in wrap(text, width.saturating_sub(indent).max(1)) {
        doc.push(Line::from(Span::styled(format!("{pad}{row}"), style)));
    }
}

fn heading(doc: &mut Document, text: &str, ctx: &RenderContext<'_>) {
    doc.push(Line::from(Span::styled(
        format!("{}{text}", " ".repeat(MARGIN)),
        Style::default()
            .fg(ctx.palette.primary)
            .add_modifier(Modifier::BOLD),
    )));
}

/// Lays out the listing page.
#[must_use]
pub fn compose(ctx: &RenderContext<'_>, params: &HomeParams) -> Document {
    let mut doc = Document::new();
    hero(&mut doc, ctx, params);
    about_me(&mut doc, ctx, params);
    work_experience(&mut doc, ctx, params);
    portfolio(&mut doc, ctx, params);
    collaborators(&mut doc, ctx, params);
    footer(&mut doc, ctx, params);
    doc
}

fn hero(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(HERO, true);

    let rows = params.viewport_rows.max(params.header_rows + 5);
    let width = params.width.max(1);
    let content_rows = rows - params.header_rows;
    let name_row = params.header_rows + content_rows / 2 - 1;
    let title_row = name_row + 2;
    let hint_row = rows - 2;

    let title = ctx.labels.t("home", &format!("title_{}", params.hero_title + 1));
    let hint = format!("↓ {} (3)", ctx.labels.t("home", "my_projects"));

    for row in 0..rows {
        let bg = params.backdrop.row_color(row, rows);
        let base = Style::default().bg(bg).fg(Color::White);
        let line = if row == name_row {
            Line::from(Span::styled(
                center(OWNER_NAME, width),
                base.add_modifier(Modifier::BOLD),
            ))
        } else if row == title_row {
            hero_title_line(&center(&title, width), base)
        } else if row == hint_row {
            Line::from(Span::styled(center(&hint, width), base.fg(Color::Gray)))
        } else {
            let pattern: String = (0..width)
                .map(|col| params.backdrop.glyph(col).unwrap_or(' '))
                .collect();
            Line::from(Span::styled(pattern, base.fg(Color::DarkGray)))
        };
        doc.push(line);
    }
}

/// Renders a centered title with the IBM brand in its own color.
fn hero_title_line(text: &str, base: Style) -> Line<'static> {
    match text.find("IBM") {
        Some(at) => Line::from(vec![
            Span::styled(text[..at].to_string(), base),
            Span::styled(
                "IBM".to_string(),
                base.fg(IBM_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(text[at + 3..].to_string(), base),
        ]),
        None => Line::from(Span::styled(text.to_string(), base)),
    }
}

fn about_me(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(ABOUT_ME, true);
    let width = text_width(params);
    let body = Style::default().fg(ctx.palette.text);

    doc.blank();
    heading(doc, &ctx.labels.t("about_me", "title"), ctx);
    doc.blank();
    for key in ["description_1", "description_2", "description_3"] {
        paragraph(doc, &ctx.labels.t("about_me", key), width, 0, body);
        doc.blank();
    }
    paragraph(
        doc,
        &format!("{}: {RESUME_URL}", ctx.labels.t("about_me", "view_resume")),
        width,
        0,
        Style::default().fg(ctx.palette.accent),
    );
    doc.blank();
    interview_card(doc, ctx, params);
    doc.blank();
}

/// Framed card linking the recorded interview. `y` copies its link while
/// the about section is active.
fn interview_card(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    let width = text_width(params).clamp(8, 72);
    let frame = Style::default().fg(params.glow.border);
    let pad = " ".repeat(MARGIN);
    let rule = "─".repeat(width - 1);
    let bar = || Span::styled("│ ", frame);

    doc.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(format!("╭{rule}"), frame),
    ]));
    doc.push(Line::from(vec![
        Span::raw(pad.clone()),
        bar(),
        Span::styled(
            format!("▶ {}  ", ctx.labels.t("interview", "title")),
            Style::default()
                .fg(ctx.palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", ctx.labels.t("interview", "duration")),
            Style::default()
                .fg(ctx.palette.background)
                .bg(params.glow.border),
        ),
    ]));
    for row in wrap(&ctx.labels.t("interview", "description"), width - 2) {
        doc.push(Line::from(vec![
            Span::raw(pad.clone()),
            bar(),
            Span::styled(row, Style::default().fg(ctx.palette.text_secondary)),
        ]));
    }
    doc.push(Line::from(vec![
        Span::raw(pad.clone()),
        bar(),
        Span::styled(
            format!("↗ {} (y)", ctx.labels.t("interview", "watch_on_youtube")),
            Style::default().fg(ctx.palette.accent),
        ),
    ]));
    doc.push(Line::from(vec![
        Span::raw(pad),
        Span::styled(format!("╰{rule}"), frame),
    ]));
}

fn work_experience(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(WORK_EXPERIENCE_SECTION, false);
    let width = text_width(params);

    doc.blank();
    heading(doc, &ctx.labels.t("work_experience", "title"), ctx);
    paragraph(
        doc,
        &ctx.labels.t("work_experience", "description"),
        width,
        0,
        Style::default().fg(ctx.palette.text_secondary),
    );
    doc.blank();

    for entry in WORK_EXPERIENCE {
        doc.push(Line::from(vec![
            Span::styled(
                format!("{}{:<16}", " ".repeat(MARGIN), entry.year),
                Style::default().fg(ctx.palette.text_secondary),
            ),
            Span::styled(
                entry.company,
                Style::default()
                    .fg(ctx.palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", ctx.labels.t("work_experience", &entry.position_key())),
                Style::default().fg(ctx.palette.accent),
            ),
        ]));
        paragraph(
            doc,
            &ctx.labels.t("work_experience", &entry.description_key()),
            width,
            16,
            Style::default().fg(ctx.palette.text),
        );
    }
    doc.blank();
}

fn portfolio(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(PORTFOLIO, true);
    let width = text_width(params);

    doc.blank();
    heading(doc, &ctx.labels.t("portfolio", "title"), ctx);
    paragraph(
        doc,
        &ctx.labels.t("portfolio", "description"),
        width,
        0,
        Style::default().fg(ctx.palette.text_secondary),
    );
    doc.blank();

    for (index, project) in PROJECTS.iter().enumerate() {
        let selected = index == params.selected;
        let (marker, title_style) = if selected {
            (
                "▶ ",
                Style::default()
                    .fg(ctx.palette.accent)
                    .bg(ctx.palette.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  ",
                Style::default()
                    .fg(ctx.palette.text)
                    .add_modifier(Modifier::BOLD),
            )
        };

        doc.anchor();
        doc.push(Line::from(vec![
            Span::raw(" ".repeat(MARGIN)),
            Span::styled(marker, Style::default().fg(ctx.palette.accent)),
            Span::styled(ctx.labels.t("projects", &project.title_key()), title_style),
            Span::styled(
                format!("  [{}]", project.category.label()),
                Style::default().fg(ctx.palette.text_muted),
            ),
        ]));
        paragraph(
            doc,
            &ctx.labels.t("projects", &project.description_key()),
            width,
            2,
            Style::default().fg(ctx.palette.text),
        );
        let mut tags = vec![Span::raw(" ".repeat(MARGIN + 2))];
        for tag in project.tags {
            let (r, g, b) = tag.color;
            tags.push(Span::styled(
                format!("● {} ", tag.name),
                Style::default().fg(Color::Rgb(r, g, b)),
            ));
        }
        doc.push(Line::from(tags));
        doc.blank();
    }
}

fn collaborators(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(COLLABORATORS, false);
    let width = text_width(params);

    heading(doc, &ctx.labels.t("collaborators", "title"), ctx);
    paragraph(
        doc,
        &ctx.labels.t("collaborators", "description"),
        width,
        0,
        Style::default().fg(ctx.palette.text_secondary),
    );
    doc.blank();
    for person in CONTRIBUTORS {
        doc.push(Line::from(vec![
            Span::raw(" ".repeat(MARGIN)),
            Span::styled(person.name, Style::default().fg(ctx.palette.text)),
            Span::styled(
                format!("  @{}", person.handle),
                Style::default().fg(ctx.palette.text_muted),
            ),
        ]));
    }
    doc.blank();
}

fn footer(doc: &mut Document, ctx: &RenderContext<'_>, params: &HomeParams) {
    doc.section(FOOTER, false);
    let muted = Style::default().fg(ctx.palette.text_muted);

    doc.push(Line::from(Span::styled("─".repeat(params.width), muted)));
    let links = CONTACT_LINKS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("  ·  ");
    doc.push(Line::from(Span::styled(
        center(&links, params.width),
        Style::default().fg(ctx.palette.primary),
    )));
    doc.push(Line::from(Span::styled(
        center(
            &copyright_line(params.year, &ctx.labels.t("footer", "rights")),
            params.width,
        ),
        muted,
    )));
    doc.blank();
}
