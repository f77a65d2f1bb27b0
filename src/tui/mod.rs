//! Terminal user interface: state, event loop and page composition.
//!
//! [`AppState`] is the composition root. It creates the scroll machinery,
//! holds the injected preference store, attaches one preference observer per
//! derived value, and rebuilds the current page's [`Document`] whenever an
//! observer or the page itself asks for it.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod clipboard;
pub mod component;
pub mod detail;
pub mod document;
pub mod header;
pub mod help_overlay;
pub mod home;
pub mod not_found;
pub mod preview;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use chrono::Datelike;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::branding::INTERVIEW_URL;
use crate::config::{Config, ScrollConfig};
use crate::content::PROJECTS;
use crate::i18n::Translator;
use crate::nav::{NavOutcome, NavTarget, NavigationDispatcher};
use crate::prefs::{Language, PreferenceObserver, PreferenceStore, SystemHints};
use crate::router::{resolve, Navigator, Page, Route, Router};
use crate::scroll::{FrameClock, ScrollTracker, TrackerSettings, Viewport, ViewportState};
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};

// Re-export TUI components
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use component::{Component, RenderContext};
pub use document::Document;
pub use header::Header;
pub use help_overlay::{HelpEvent, HelpOverlay};
pub use home::HeroRotation;
pub use preview::{PreviewEvent, PreviewModal};
pub use status_bar::StatusBar;
pub use theme::{Backdrop, CardGlow, Palette};

/// Time between two frames of the event loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Time between two polls of the OS color scheme.
pub const SYSTEM_HINT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Overlay drawn above the page.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// Project preview modal
    Preview(PreviewModal),
    /// Key bindings
    Help(HelpOverlay),
}

/// Source of OS preference hints, replaceable in tests.
pub type HintSource = Box<dyn Fn() -> SystemHints>;

/// Application state for the interactive viewer.
pub struct AppState {
    store: PreferenceStore,
    translator: Translator,
    router: Router,
    viewport: Viewport,
    clock: FrameClock,
    tracker: ScrollTracker,
    dispatcher: NavigationDispatcher,
    scroll: ScrollConfig,
    registry: ShortcutRegistry,

    palette: PreferenceObserver<Palette>,
    backdrop: PreferenceObserver<Backdrop>,
    glow: PreferenceObserver<CardGlow>,
    language: PreferenceObserver<Language>,

    hero: HeroRotation,
    selected_project: usize,
    overlay: Option<Overlay>,
    status_message: Option<String>,
    should_quit: bool,

    clipboard: Box<dyn ClipboardSink>,
    hint_source: HintSource,
    last_hint_poll: Instant,

    width: u16,
    height: u16,
    year: i32,
    document: Document,
}

impl AppState {
    /// Builds the viewer for a terminal of `width` x `height` cells.
    pub fn new(
        store: PreferenceStore,
        translator: Translator,
        config: &Config,
        route: Route,
        clipboard: Box<dyn ClipboardSink>,
        (width, height): (u16, u16),
    ) -> Self {
        let now = Instant::now();
        let scroll = config.scroll;
        let viewport = Viewport::new(0.0);
        let clock = FrameClock::new();
        let settings = TrackerSettings::from_config(&scroll).with_reveal_section(home::PORTFOLIO);
        let tracker = ScrollTracker::new(
            &viewport,
            &clock,
            settings,
            crate::scroll::SectionLayout::new(),
        );

        let palette = PreferenceObserver::new(&store, |p| Palette::for_theme(p.theme));
        let backdrop = PreferenceObserver::new(&store, |p| Backdrop::for_dark(p.theme.is_dark()));
        let glow = PreferenceObserver::new(&store, |p| CardGlow::for_dark(p.theme.is_dark()));
        let language = PreferenceObserver::new(&store, |p| p.language);

        let overlay = config
            .ui
            .show_help_on_startup
            .then(|| Overlay::Help(HelpOverlay::new(&ShortcutRegistry::new())));

        let mut state = Self {
            store,
            translator,
            router: Router::new(route),
            viewport,
            clock,
            tracker,
            dispatcher: NavigationDispatcher::new(scroll.header_height),
            scroll,
            registry: ShortcutRegistry::new(),
            palette,
            backdrop,
            glow,
            language,
            hero: HeroRotation::new(now),
            selected_project: 0,
            overlay,
            status_message: None,
            should_quit: false,
            clipboard,
            hint_source: Box::new(SystemHints::detect),
            last_hint_poll: now,
            width,
            height,
            year: chrono::Local::now().year(),
            document: Document::new(),
        };
        state.relayout();
        state
    }

    /// Replaces the OS hint source (the default queries the OS).
    #[must_use]
    pub fn with_hint_source(mut self, source: HintSource) -> Self {
        self.hint_source = source;
        self
    }

    /// Fixes the footer year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self.relayout();
        self
    }

    /// The injected preference store.
    pub const fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// The scrollable viewport.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The frame clock driving the scroll tracker.
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Latest scroll-derived state.
    pub fn viewport_state(&self) -> ViewportState {
        self.tracker.state()
    }

    /// Current address.
    pub const fn route(&self) -> &Route {
        self.router.current()
    }

    /// What the current address resolves to.
    pub fn page(&self) -> Page {
        resolve(self.router.current(), PROJECTS)
    }

    /// Selected project card.
    pub const fn selected_project(&self) -> usize {
        self.selected_project
    }

    /// Open overlay, if any.
    pub const fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Message shown in the status bar.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Whether the user asked to quit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current page layout.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Current hero title.
    pub const fn hero(&self) -> &HeroRotation {
        &self.hero
    }

    /// Labels and colors for drawing.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            labels: self.translator.labels(self.language.value()),
            palette: self.palette.value(),
        }
    }

    fn row_px(&self) -> f64 {
        self.scroll.row_height_px
    }

    /// Rows available to the page (the status bar takes one).
    pub fn body_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(1))
    }

    /// Rows covered by the header.
    pub fn header_rows(&self) -> usize {
        let rows = (self.scroll.header_height / self.row_px()).ceil().max(1.0) as usize;
        rows.min(self.body_rows())
    }

    /// Page offset in rows.
    pub fn offset_rows(&self) -> usize {
        (self.viewport.offset() / self.row_px()).round() as usize
    }

    /// Adapts to a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    /// Rebuilds the current page and hands its section layout to the tracker.
    fn relayout(&mut self) {
        let ctx = RenderContext {
            labels: self.translator.labels(self.language.value()),
            palette: self.palette.value(),
        };
        let width = usize::from(self.width);
        let header_rows = self.header_rows();
        let document = match self.page() {
            Page::Home => home::compose(
                &ctx,
                &home::HomeParams {
                    hero_title: self.hero.index(),
                    selected: self.selected_project,
                    backdrop: self.backdrop.value(),
                    glow: self.glow.value(),
                    year: self.year,
                    width,
                    viewport_rows: self.body_rows(),
                    header_rows,
                },
            ),
            Page::ProjectDetail { project, .. } => detail::compose(&ctx, project, width, header_rows),
            Page::NotFound(page) => {
                not_found::compose(&ctx, &page, width, self.body_rows(), header_rows)
            }
        };

        let row_px = self.row_px();
        self.viewport
            .resize(self.body_rows() as f64 * row_px, document.height_px(row_px));
        let layout = document.layout(row_px);
        if layout != self.tracker.layout() {
            self.tracker.set_layout(layout);
        }
        self.document = document;
    }

    /// Advances time: hero rotation, OS hint polling, frame callbacks and
    /// smooth scrolling. Called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        let mut dirty = false;

        if matches!(self.page(), Page::Home) && self.hero.tick(now) {
            dirty = true;
        }

        if now.saturating_duration_since(self.last_hint_poll) >= SYSTEM_HINT_POLL_INTERVAL {
            self.last_hint_poll = now;
            let hints = (self.hint_source)();
            self.store.apply_system_hint(&hints);
        }

        self.clock.tick();
        self.viewport.advance_animation();

        // Consume every flag; each observer has to be re-armed
        let palette = self.palette.take_render_request();
        let backdrop = self.backdrop.take_render_request();
        let glow = self.glow.take_render_request();
        let language = self.language.take_render_request();
        if dirty || palette || backdrop || glow || language {
            self.relayout();
        }
    }

    /// Handles a key press. Returns `true` when the viewer should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        self.status_message = None;

        match self.overlay.take() {
            Some(Overlay::Help(mut help)) => {
                match help.handle_input(key) {
                    Some(HelpEvent::Close) => {}
                    Some(HelpEvent::Quit) => self.should_quit = true,
                    None => self.overlay = Some(Overlay::Help(help)),
                }
                return Ok(self.should_quit);
            }
            Some(Overlay::Preview(mut modal)) => {
                match modal.handle_input(key) {
                    Some(PreviewEvent::Open(index)) => {
                        self.close_preview();
                        self.open_project(index);
                    }
                    Some(PreviewEvent::CopyLink(index)) => {
                        self.overlay = Some(Overlay::Preview(modal));
                        self.copy_link(index);
                    }
                    Some(PreviewEvent::ToggleTheme) => {
                        self.overlay = Some(Overlay::Preview(modal));
                        self.store.toggle_theme();
                    }
                    Some(PreviewEvent::CycleLanguage) => {
                        self.overlay = Some(Overlay::Preview(modal));
                        self.store.cycle_language();
                    }
                    Some(PreviewEvent::Close) => self.close_preview(),
                    Some(PreviewEvent::Quit) => self.should_quit = true,
                    None => self.overlay = Some(Overlay::Preview(modal)),
                }
                return Ok(self.should_quit);
            }
            None => {}
        }

        if let Some(action) = self.registry.lookup(ShortcutContext::Page, key) {
            self.dispatch_action(action);
        }
        Ok(self.should_quit)
    }

    /// Handles mouse wheel scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.overlay.is_some() {
            return;
        }
        let step = self.scroll.step_px();
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_by(step);
            }
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_by(-step);
            }
            _ => {}
        }
    }

    /// Performs `action` on the current page.
    pub fn dispatch_action(&mut self, action: Action) {
        let step = self.scroll.step_px();
        let page_px = (self.body_rows() as f64 * self.row_px() - self.scroll.header_height).max(step);
        match action {
            Action::ScrollUp => {
                self.viewport.scroll_by(-step);
            }
            Action::ScrollDown => {
                self.viewport.scroll_by(step);
            }
            Action::PageUp => {
                self.viewport.scroll_by(-page_px);
            }
            Action::PageDown => {
                self.viewport.scroll_by(page_px);
            }
            Action::ScrollToTop => self.viewport.scroll_smoothly_to(0.0),
            Action::GoToHero => {
                self.follow_link(home::NAV_LINKS[0].0);
            }
            Action::GoToAboutMe => {
                self.follow_link(home::NAV_LINKS[1].0);
            }
            Action::GoToPortfolio => {
                self.follow_link(home::NAV_LINKS[2].0);
            }
            Action::NextProject => self.select_project(1),
            Action::PreviousProject => self.select_project(-1),
            Action::OpenPreview => {
                if matches!(self.page(), Page::Home) {
                    self.viewport.set_locked(true);
                    self.overlay = Some(Overlay::Preview(PreviewModal::new(self.selected_project)));
                }
            }
            Action::OpenProject => match self.page() {
                Page::Home => self.open_project(self.selected_project),
                Page::NotFound(page) => {
                    if let Some(action) = page.actions().first() {
                        self.navigate(action.target());
                    }
                }
                Page::ProjectDetail { .. } => {}
            },
            Action::CopyLink => match self.page() {
                Page::Home if self.tracker.state().active_section == home::ABOUT_ME => {
                    self.copy_text(INTERVIEW_URL);
                }
                Page::Home => self.copy_link(self.selected_project),
                Page::ProjectDetail { index, .. } => self.copy_link(index),
                Page::NotFound(_) => {}
            },
            Action::ToggleTheme => {
                self.store.toggle_theme();
            }
            Action::CycleLanguage => {
                self.store.cycle_language();
            }
            Action::ToggleHelp => {
                self.overlay = Some(Overlay::Help(HelpOverlay::new(&self.registry)));
            }
            Action::Back => self.go_back(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Follows a link as if clicked in the header.
    ///
    /// Fragment links on another page first return to the listing page.
    pub fn follow_link(&mut self, href: &str) -> NavOutcome {
        let target = NavTarget::parse(href);
        if matches!(target, NavTarget::Fragment(_)) && !matches!(self.page(), Page::Home) {
            self.navigate(Route::Home);
        }
        let before = self.router.current().clone();
        let outcome = self.dispatcher.dispatch(
            &target,
            &self.tracker.layout(),
            &self.viewport,
            &mut self.router,
        );
        if *self.router.current() != before {
            self.after_navigation();
        }
        outcome
    }

    fn navigate(&mut self, route: Route) {
        let before = self.router.current().clone();
        self.router.navigate(route);
        if *self.router.current() != before {
            self.after_navigation();
        }
    }

    fn go_back(&mut self) {
        if matches!(self.page(), Page::Home) {
            return;
        }
        if self.router.back() {
            self.after_navigation();
        }
    }

    /// Re-lays out the new page and puts it at its entry position: detail
    /// and not-found pages open at the top, the listing page returns to the
    /// selected card.
    fn after_navigation(&mut self) {
        self.close_preview();
        self.overlay = None;
        self.relayout();
        match self.page() {
            Page::Home => {
                let target = self.card_offset(self.selected_project).unwrap_or(0.0);
                self.viewport.set_offset(target);
            }
            Page::ProjectDetail { index, .. } => {
                self.selected_project = index;
                self.viewport.set_offset(0.0);
            }
            Page::NotFound(_) => {
                self.viewport.set_offset(0.0);
            }
        }
    }

    fn open_project(&mut self, index: usize) {
        let Ok(index) = i64::try_from(index) else {
            return;
        };
        self.navigate(Route::Project(index));
    }

    fn close_preview(&mut self) {
        if matches!(self.overlay, Some(Overlay::Preview(_))) {
            self.overlay = None;
        }
        self.viewport.set_locked(false);
    }

    fn card_offset(&self, index: usize) -> Option<f64> {
        let row = *self.document.anchors().get(index)?;
        Some(self.dispatcher.scroll_offset(row as f64 * self.row_px()))
    }

    fn select_project(&mut self, delta: isize) {
        if !matches!(self.page(), Page::Home) || PROJECTS.is_empty() {
            return;
        }
        let len = PROJECTS.len() as isize;
        self.selected_project = (self.selected_project as isize + delta).rem_euclid(len) as usize;
        self.relayout();

        let Some(card_top) = self
            .document
            .anchors()
            .get(self.selected_project)
            .map(|row| *row as f64 * self.row_px())
        else {
            return;
        };
        let visible_top = self.viewport.offset() + self.scroll.header_height;
        let visible_bottom = self.viewport.offset() + self.viewport.height() - 4.0 * self.row_px();
        if card_top < visible_top || card_top > visible_bottom {
            self.viewport
                .scroll_smoothly_to(self.dispatcher.scroll_offset(card_top));
        }
    }

    fn copy_link(&mut self, index: usize) {
        let Some(project) = PROJECTS.get(index) else {
            return;
        };
        let text = project
            .links
            .primary()
            .map_or_else(|| Route::Project(index as i64).path(), str::to_string);
        self.copy_text(&text);
    }

    fn copy_text(&mut self, text: &str) {
        let labels = self.translator.labels(self.language.value());
        match self.clipboard.set_text(text) {
            Ok(()) => {
                tracing::info!(link = %text, "Copied link");
                self.status_message = Some(labels.t("ui", "copied"));
            }
            Err(e) => {
                tracing::warn!("{e:#}");
                self.status_message = Some(labels.t("ui", "copy_failed"));
            }
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key(key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => state.handle_mouse(mouse),
                Event::Resize(width, height) => state.resize(width, height),
                _ => {}
            }
        }

        state.tick(Instant::now());

        if state.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let ctx = state.render_context();
    let area = f.area();

    let full_bg = Block::default().style(
        Style::default()
            .bg(ctx.palette.background)
            .fg(ctx.palette.text),
    );
    f.render_widget(full_bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let body = chunks[0];

    let lines = state.document().lines();
    let start = state.offset_rows().min(lines.len());
    let end = (start + usize::from(body.height)).min(lines.len());
    f.render_widget(Paragraph::new(lines[start..end].to_vec()), body);

    let page = state.page();
    let header_area = Rect {
        height: (state.header_rows() as u16).min(body.height),
        ..body
    };
    Header::render(
        f,
        header_area,
        &ctx,
        &state.viewport_state(),
        state.store().get(),
        matches!(page, Page::Home),
    );

    if matches!(page, Page::Home) && state.viewport_state().show_scroll_top {
        render_scroll_top(f, body, &ctx);
    }

    match state.overlay() {
        Some(Overlay::Preview(modal)) => modal.render(f, area, &ctx),
        Some(Overlay::Help(help)) => help.render(f, area, &ctx),
        None => {}
    }

    StatusBar::render(f, chunks[1], &ctx, state.status_message(), state.route());
}

fn render_scroll_top(f: &mut Frame, body: Rect, ctx: &RenderContext<'_>) {
    let label = format!(" ↑ {} (g) ", ctx.labels.t("ui", "scroll_top"));
    let width = (label.chars().count() as u16).min(body.width);
    if body.height < 2 || width == 0 {
        return;
    }
    let area = Rect {
        x: body.x + body.width - width,
        y: body.y + body.height - 2,
        width,
        height: 1,
    };
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(ctx.palette.background)
            .bg(ctx.palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(button, area);
}
