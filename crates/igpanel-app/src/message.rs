//! Message types for the application (TEA pattern)

use igpanel_client::ActionKind;
use igpanel_core::{AccountStatusSnapshot, ActionOutcome};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for timed transitions and toast expiry
    Tick,

    /// Leave the application (Ctrl+C, signal handler, `quit` command)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Log Stream Messages
    // ─────────────────────────────────────────────────────────
    /// A line from the log stream, tagged with the page load it belongs to
    StreamLog { generation: u64, line: String },

    /// Empty the current page's log
    ClearLogs,

    // ─────────────────────────────────────────────────────────
    // Status Messages
    // ─────────────────────────────────────────────────────────
    /// One-shot status check finished; `None` when the backend did not say
    StatusChecked {
        generation: u64,
        initialized: Option<bool>,
    },

    /// Fresh account list for the dashboard
    AccountsFetched {
        generation: u64,
        snapshot: AccountStatusSnapshot,
    },

    /// Operator asked for an immediate account refresh
    RefreshAccounts,

    // ─────────────────────────────────────────────────────────
    // Action Messages
    // ─────────────────────────────────────────────────────────
    /// Start initialization from the init page
    StartInit,

    /// Submit a dashboard action using the form inputs
    SubmitAction(ActionKind),

    /// Submit an action with explicit inputs (headless commands)
    SubmitWith {
        kind: ActionKind,
        username: String,
        url: String,
        comment: String,
    },

    /// An action request came back (or failed to reach the backend)
    ActionCompleted {
        kind: ActionKind,
        outcome: ActionOutcome,
    },

    /// Close the modal prompt
    DismissPrompt,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormNextField,
    FormPrevField,
}
