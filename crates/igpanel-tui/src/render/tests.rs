//! Full-screen render tests

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use igpanel_app::{AppState, Prompt, ToastKind, READY_PHRASE};
use igpanel_core::{AccountStatus, AccountStatusSnapshot, Page};

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_init_page_initial_screen() {
    let (mut state, _clock) = create_test_state(Page::Init);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Initialization"));
    assert!(term.buffer_contains("Waiting for initialization"));
    assert!(term.buffer_contains("Waiting for log output"));
    assert!(term.buffer_contains("Enter Start"));
}

#[test]
fn test_init_page_shows_logs() {
    let (mut state, _clock) = create_test_state(Page::Init);
    state.log_sink.append_line("[alice] [LOGIN] [SUCCESS] logged in");
    state.log_sink.append_line(READY_PHRASE);

    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Logs (2)"));
    assert!(term.buffer_contains("logged in"));
    assert!(term.buffer_contains(READY_PHRASE));
}

#[test]
fn test_cleared_log_placeholder() {
    let (mut state, _clock) = create_test_state(Page::Init);
    state.log_sink.append_line("one");
    state.log_sink.clear();

    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Log cleared"));
}

#[test]
fn test_dashboard_screen() {
    let (mut state, _clock) = create_test_state(Page::Dashboard);
    state.set_accounts(AccountStatusSnapshot {
        initialized: true,
        accounts: vec![AccountStatus {
            username: "alice".into(),
            logged_in: true,
            status: None,
        }],
        message: None,
    });

    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Dashboard"));
    assert!(term.buffer_contains("alice"));
    assert!(term.buffer_contains("Username"));
    assert!(term.buffer_contains("F1 Follow"));
}

#[test]
fn test_dashboard_before_first_poll() {
    let (mut state, _clock) = create_test_state(Page::Dashboard);
    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Loading accounts"));
}

#[test]
fn test_prompt_overlays_screen() {
    let (mut state, _clock) = create_test_state(Page::Init);
    state.prompt = Some(Prompt::init_succeeded());

    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Initialization complete"));
    assert!(term.buffer_contains("[Enter] OK"));
    assert!(term.buffer_contains("Enter Dismiss"));
}

#[test]
fn test_toast_rendered() {
    let (mut state, _clock) = create_test_state(Page::Dashboard);
    state.notify(ToastKind::Success, "Followed alice");

    let term = render_screen(&mut state);
    assert!(term.buffer_contains("Followed alice"));
}

#[test]
fn test_render_updates_visible_lines() {
    let (mut state, _clock) = create_test_state(Page::Init);
    for i in 0..100 {
        state.log_sink.append_line(&format!("line {i}"));
    }

    let term = render_screen(&mut state);
    assert!(state.log_sink.view.visible_lines > 0);
    assert!(term.buffer_contains("line 99"));
}
