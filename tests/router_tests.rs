//! Integration tests for page addresses, detail pages and the not-found
//! recovery path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::branding::INTERVIEW_URL;
use folio::content::PROJECTS;
use folio::router::{resolve, Page, RecoveryAction, Route};
use folio::tui::{AppState, Overlay};

mod fixtures;
use fixtures::*;

fn press(state: &mut AppState, code: KeyCode) {
    state
        .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

#[test]
fn test_every_project_has_a_stable_address() {
    for (index, project) in PROJECTS.iter().enumerate() {
        let route = Route::parse(&format!("/project/{index}"));
        match resolve(&route, PROJECTS) {
            Page::ProjectDetail { index: got, project: p } => {
                assert_eq!(got, index);
                assert_eq!(p.key, project.key);
            }
            other => panic!("expected detail page for {route}, got {other:?}"),
        }
    }
}

#[test]
fn test_out_of_range_and_malformed_addresses_are_not_found() {
    for path in [
        format!("/project/{}", PROJECTS.len()),
        "/project/-1".to_string(),
        "/project/abc".to_string(),
        "/blog".to_string(),
    ] {
        let page = resolve(&Route::parse(&path), PROJECTS);
        let Page::NotFound(not_found) = page else {
            panic!("{path} should not resolve");
        };
        assert_eq!(not_found.requested, path);
        assert_eq!(not_found.actions(), &[RecoveryAction::BackToHome]);
    }
}

#[test]
fn test_not_found_page_recovers_to_home() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Project(99));
    assert!(matches!(state.page(), Page::NotFound(_)));

    press(&mut state, KeyCode::Enter);

    assert_eq!(state.route(), &Route::Home);
    assert!(matches!(state.page(), Page::Home));
}

#[test]
fn test_open_project_and_come_back_to_same_card() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);

    for _ in 0..4 {
        press(&mut state, KeyCode::Tab);
    }
    assert_eq!(state.selected_project(), 4);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.route(), &Route::Project(4));
    assert!(state.viewport().offset().abs() < f64::EPSILON);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.route(), &Route::Home);
    assert_eq!(state.selected_project(), 4);
    assert!(state.viewport().offset() > 0.0);
}

#[test]
fn test_project_selection_wraps() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);

    press(&mut state, KeyCode::Left);

    assert_eq!(state.selected_project(), PROJECTS.len() - 1);
}

#[test]
fn test_preview_opens_project() {
    let (mut state, _clipboard) = viewer(blank_store(), Route::Home);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char(' '));
    assert!(matches!(state.overlay(), Some(Overlay::Preview(_))));

    press(&mut state, KeyCode::Enter);

    assert!(state.overlay().is_none());
    assert!(!state.viewport().is_locked());
    assert_eq!(state.route(), &Route::Project(1));
}

#[test]
fn test_copy_link_uses_route_when_project_has_no_links() {
    let (mut state, clipboard) = viewer(blank_store(), Route::Project(2));

    press(&mut state, KeyCode::Char('y'));

    assert_eq!(clipboard.copies(), vec!["/project/2".to_string()]);
    assert_eq!(state.status_message(), Some("Link copied to clipboard"));
}

#[test]
fn test_copy_failure_is_reported_not_fatal() {
    let store = blank_store();
    let mut state = AppState::new(
        store,
        folio::i18n::Translator::bundled(),
        &quiet_config(),
        Route::Home,
        Box::new(folio::tui::MemoryClipboard::broken()),
        TERMINAL,
    );

    press(&mut state, KeyCode::Char('y'));

    assert_eq!(state.status_message(), Some("Could not copy link"));
    assert!(!state.should_quit());
}

#[test]
fn test_copy_link_in_about_section_copies_interview() {
    let (mut state, clipboard) = viewer(blank_store(), Route::Home);
    press(&mut state, KeyCode::Char('2'));
    for _ in 0..30 {
        state.tick(std::time::Instant::now());
    }
    assert_eq!(state.viewport_state().active_section, "about-me");

    press(&mut state, KeyCode::Char('y'));

    assert_eq!(clipboard.copies(), vec![INTERVIEW_URL.to_string()]);
    assert_eq!(state.status_message(), Some("Link copied to clipboard"));
}
