//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{actions, keys::handle_key, scroll, status, stream, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => stream::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Log Stream Messages
        // ─────────────────────────────────────────────────────────
        Message::StreamLog { generation, line } => {
            stream::handle_stream_log(state, generation, &line)
        }
        Message::ClearLogs => stream::handle_clear_logs(state),

        // ─────────────────────────────────────────────────────────
        // Status Messages
        // ─────────────────────────────────────────────────────────
        Message::StatusChecked {
            generation,
            initialized,
        } => status::handle_status_checked(state, generation, initialized),
        Message::AccountsFetched {
            generation,
            snapshot,
        } => status::handle_accounts_fetched(state, generation, snapshot),
        Message::RefreshAccounts => status::handle_refresh_accounts(state),

        // ─────────────────────────────────────────────────────────
        // Action Messages
        // ─────────────────────────────────────────────────────────
        Message::StartInit => actions::handle_start_init(state),
        Message::SubmitAction(kind) => actions::handle_submit_action(state, kind),
        Message::SubmitWith {
            kind,
            username,
            url,
            comment,
        } => actions::handle_submit_with(state, kind, &username, &url, &comment),
        Message::ActionCompleted { kind, outcome } => {
            actions::handle_action_completed(state, kind, outcome)
        }
        Message::DismissPrompt => {
            state.prompt = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => {
            state.form.insert_char(c);
            UpdateResult::none()
        }
        Message::FormBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }
        Message::FormClearField => {
            state.form.clear_focused();
            UpdateResult::none()
        }
        Message::FormNextField => {
            state.form.focus_next();
            UpdateResult::none()
        }
        Message::FormPrevField => {
            state.form.focus_prev();
            UpdateResult::none()
        }
    }
}
