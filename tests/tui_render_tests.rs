//! Rendering tests against ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::prefs::{PreferenceStore, SystemHints, Theme};
use folio::router::Route;
use folio::tui::{self, AppState, CardGlow, Palette};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

mod fixtures;
use fixtures::*;

fn draw(state: &AppState) -> Buffer {
    let (width, height) = TERMINAL;
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| tui::render(f, state)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(state: &mut AppState, code: KeyCode) {
    state
        .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn settle(state: &mut AppState) {
    for _ in 0..30 {
        state.tick(std::time::Instant::now());
    }
}

#[test]
fn test_home_shows_header_hero_and_status() {
    let (state, _clipboard) = viewer(blank_store(), Route::Home);
    let buffer = draw(&state);
    let screen = screen_text(&buffer);

    assert!(screen.contains("glovooker"));
    assert!(screen.contains("1 Home"));
    assert!(screen.contains("3 Projects"));
    assert!(screen.contains("Gabriel Lobo"));
    assert!(screen.contains("Senior Full Stack Developer at IBM"));
    assert!(row_text(&buffer, TERMINAL.1 - 1).contains('/'));
}

#[test]
fn test_active_link_is_highlighted() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    press(&mut state, KeyCode::Char('3'));
    settle(&mut state);

    let buffer = draw(&state);
    let palette = Palette::light();
    let header_row = (0..state.header_rows() as u16)
        .find(|y| row_text(&buffer, *y).contains("3 Projects"))
        .expect("header row with links");
    let text = row_text(&buffer, header_row);
    let byte = text.find("3 Projects").unwrap();
    let column = text[..byte].chars().count();

    assert_eq!(buffer[(column as u16, header_row)].fg, palette.accent);
}

#[test]
fn test_elevated_header_uses_surface() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    let transparent = draw(&state);
    assert_eq!(transparent[(0, 0)].bg, Palette::light().background);

    press(&mut state, KeyCode::Char('2'));
    settle(&mut state);
    let elevated = draw(&state);

    assert_eq!(elevated[(0, 0)].bg, Palette::light().surface);
}

#[test]
fn test_scroll_top_button_appears_over_portfolio() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    assert!(!screen_text(&draw(&state)).contains("Back to top"));

    press(&mut state, KeyCode::Char('3'));
    settle(&mut state);

    assert!(screen_text(&draw(&state)).contains("Back to top"));
}

#[test]
fn test_dark_theme_from_system_hint_paints_dark_background() {
    let store = PreferenceStore::initialize(stored(None, None), &dark_hints());
    let (state, _clipboard) = viewer(store, Route::Home);
    assert_eq!(state.store().get().theme, Theme::Dark);

    let buffer = draw(&state);

    assert_eq!(buffer[(0, 0)].bg, Palette::dark().background);
}

#[test]
fn test_os_scheme_change_is_followed_until_user_picks() {
    let store = PreferenceStore::initialize(stored(None, None), &SystemHints::none());
    let (state, _clipboard) = viewer(store, Route::Home);
    let mut state = state.with_hint_source(Box::new(dark_hints));

    state.tick(std::time::Instant::now() + tui::SYSTEM_HINT_POLL_INTERVAL);
    assert_eq!(state.render_context().palette, Palette::dark());

    press(&mut state, KeyCode::Char('t'));
    state.tick(std::time::Instant::now() + tui::SYSTEM_HINT_POLL_INTERVAL * 3);
    assert_eq!(state.store().get().theme, Theme::Light);
}

#[test]
fn test_not_found_page_renders_single_action() {
    let (state, _clipboard) = viewer(blank_store(), Route::Project(42));
    let screen = screen_text(&draw(&state));

    assert!(screen.contains("404"));
    assert!(screen.contains("/project/42"));
    assert_eq!(screen.matches("[ Enter ] Back to Home").count(), 1);
}

#[test]
fn test_detail_page_in_spanish() {
    let store = PreferenceStore::initialize(
        stored(None, Some(folio::prefs::Language::Spanish)),
        &SystemHints::none(),
    );
    let (state, _clipboard) = viewer(store, Route::Project(0));
    let screen = screen_text(&draw(&state));

    assert!(screen.contains("Engage360"));
    assert!(screen.contains("/project/0"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    press(&mut state, KeyCode::Char('?'));

    let screen = screen_text(&draw(&state));

    assert!(screen.contains("Key Bindings"));
    assert!(screen.contains("Toggle light/dark theme"));

    press(&mut state, KeyCode::Esc);
    assert!(state.overlay().is_none());
}

#[test]
fn test_footer_copyright_uses_fixed_year() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    state.viewport().set_offset(state.viewport().max_offset());
    settle(&mut state);

    let screen = screen_text(&draw(&state));

    assert!(screen.contains("© 2026 Gabriel Lobo. All rights reserved."));
}

#[test]
fn test_interview_card_follows_theme() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    let title_row = state
        .document()
        .lines()
        .iter()
        .position(|line| line.to_string().contains("Interview at Universidad CENFOTEC"))
        .expect("interview card in the about section");
    let row_px = 16.0;
    state
        .viewport()
        .set_offset((title_row - state.header_rows()) as f64 * row_px);
    settle(&mut state);

    let card_color = |state: &AppState| {
        let buffer = draw(state);
        let y = (0..buffer.area.height)
            .find(|y| row_text(&buffer, *y).contains("Interview at Universidad CENFOTEC"))
            .expect("interview title on screen");
        assert!(row_text(&buffer, y).contains("Video"));
        buffer[(2, y)].fg
    };

    assert_eq!(card_color(&state), CardGlow::for_dark(false).border);

    press(&mut state, KeyCode::Char('t'));
    settle(&mut state);

    assert_eq!(card_color(&state), CardGlow::for_dark(true).border);
    let screen = screen_text(&draw(&state));
    assert!(screen.contains("Watch on YouTube (y)"));
}
