//! Key event handlers per page

use igpanel_client::ActionKind;
use igpanel_core::Page;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_quit() {
        return Some(Message::Quit);
    }

    // A prompt is modal
    if state.prompt.is_some() {
        return handle_key_prompt(key);
    }

    if let Some(msg) = handle_key_scroll(&key) {
        return Some(msg);
    }

    match state.page {
        Page::Init => handle_key_init(key),
        Page::Dashboard => handle_key_dashboard(key),
    }
}

fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissPrompt),
        _ => None,
    }
}

fn handle_key_scroll(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

fn handle_key_init(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('i') => Some(Message::StartInit),
        InputKey::Char('c') => Some(Message::ClearLogs),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Tab => Some(Message::FormNextField),
        InputKey::BackTab => Some(Message::FormPrevField),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Delete => Some(Message::FormClearField),
        InputKey::Char(c) => Some(Message::FormInput(c)),

        InputKey::F(n @ 1..=8) => ActionKind::DASHBOARD
            .get(usize::from(n) - 1)
            .copied()
            .map(Message::SubmitAction),
        InputKey::F(9) => Some(Message::RefreshAccounts),
        InputKey::F(10) => Some(Message::ClearLogs),

        _ => None,
    }
}
