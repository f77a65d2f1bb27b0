//! Centralized shortcut and action system.
//!
//! Connects the help overlay text with the actual event handling, so the two
//! can never drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SCROLLING ===
    /// Scroll up by one step
    ScrollUp,
    /// Scroll down by one step
    ScrollDown,
    /// Scroll up by one screen
    PageUp,
    /// Scroll down by one screen
    PageDown,
    /// Smooth scroll back to the top
    ScrollToTop,

    // === HEADER LINKS ===
    /// `#hero`
    GoToHero,
    /// `#about-me`
    GoToAboutMe,
    /// `#portfolio`
    GoToPortfolio,

    // === PROJECTS ===
    /// Select the next project card
    NextProject,
    /// Select the previous project card
    PreviousProject,
    /// Open the preview of the selected project
    OpenPreview,
    /// Open the detail page of the selected project
    OpenProject,
    /// Copy the selected project's link
    CopyLink,

    // === PREFERENCES ===
    /// Switch between light and dark
    ToggleTheme,
    /// Switch to the next language
    CycleLanguage,

    // === GENERAL ===
    /// Show or hide the key bindings
    ToggleHelp,
    /// Close the overlay or go back a page
    Back,
    /// Quit
    Quit,
}

impl Action {
    /// Human readable description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::PageUp => "Scroll up one screen",
            Self::PageDown => "Scroll down one screen",
            Self::ScrollToTop => "Back to top",
            Self::GoToHero => "Go to Home",
            Self::GoToAboutMe => "Go to About me",
            Self::GoToPortfolio => "Go to Projects",
            Self::NextProject => "Select next project",
            Self::PreviousProject => "Select previous project",
            Self::OpenPreview => "Preview selected project",
            Self::OpenProject => "Open selected project",
            Self::CopyLink => "Copy link",
            Self::ToggleTheme => "Toggle light/dark theme",
            Self::CycleLanguage => "Switch language",
            Self::ToggleHelp => "Show/hide this help",
            Self::Back => "Close overlay / go back",
            Self::Quit => "Quit",
        }
    }
}

/// Where a key press is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// A page without overlays
    Page,
    /// The project preview modal
    Preview,
    /// The help overlay
    Help,
}

/// A key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Creates a binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Binding matching a key event. Shift is dropped for characters since
    /// the character itself already carries it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Short label such as `PgDn` or `Ctrl+c`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Lookup table from key bindings to actions, per context.
pub struct ShortcutRegistry {
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
    order: Vec<(ShortcutContext, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_page_shortcuts();
        registry.register_preview_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    fn register_page_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Page;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::ScrollToTop);
        self.register(ctx, K::Char('g'), M::NONE, Action::ScrollToTop);

        self.register(ctx, K::Char('1'), M::NONE, Action::GoToHero);
        self.register(ctx, K::Char('2'), M::NONE, Action::GoToAboutMe);
        self.register(ctx, K::Char('3'), M::NONE, Action::GoToPortfolio);

        self.register(ctx, K::Tab, M::NONE, Action::NextProject);
        self.register(ctx, K::Right, M::NONE, Action::NextProject);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousProject);
        self.register(ctx, K::Left, M::NONE, Action::PreviousProject);
        self.register(ctx, K::Char(' '), M::NONE, Action::OpenPreview);
        self.register(ctx, K::Enter, M::NONE, Action::OpenProject);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyLink);

        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('l'), M::NONE, Action::CycleLanguage);

        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Back);
        self.register(ctx, K::Backspace, M::NONE, Action::Back);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_preview_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Preview;

        self.register(ctx, K::Enter, M::NONE, Action::OpenProject);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyLink);
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('l'), M::NONE, Action::CycleLanguage);
        self.register(ctx, K::Esc, M::NONE, Action::Back);
        self.register(ctx, K::Char(' '), M::NONE, Action::Back);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Help;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
        self.order.push((context, binding, action));
    }

    /// Action bound to `event` in `context`.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied().or_else(|| {
            // Terminals differ on whether BackTab carries SHIFT
            (event.code == KeyCode::BackTab)
                .then(|| {
                    self.bindings
                        .get(&(context, KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT)))
                        .copied()
                })
                .flatten()
        })
    }

    /// Actions of `context` with all their key labels, in registration order.
    #[must_use]
    pub fn entries(&self, context: ShortcutContext) -> Vec<(Action, Vec<String>)> {
        let mut entries: Vec<(Action, Vec<String>)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if *ctx != context {
                continue;
            }
            match entries.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) => keys.push(binding.label()),
                None => entries.push((*action, vec![binding.label()])),
            }
        }
        entries
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
