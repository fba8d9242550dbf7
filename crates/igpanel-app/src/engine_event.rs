//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner serializes them to NDJSON.

use igpanel_client::ConnectionState;
use igpanel_core::{AccountStatusSnapshot, InitState, LogEntry, Page};

use crate::notify::{Prompt, Toast};

/// Domain events emitted by the Engine.
///
/// Subscribers see a consistent view of state changes: a cycle's events are
/// sent after the whole cycle has been applied.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────
    /// A page was (re)loaded; everything per-page starts fresh
    PageLoaded { page: Page },

    // ─────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────
    LogEntry { entry: LogEntry },

    /// Several entries arrived in one cycle
    LogBatch { entries: Vec<LogEntry> },

    /// The operator cleared the current page's log
    LogCleared,

    // ─────────────────────────────────────────────────────────
    // Initialization
    // ─────────────────────────────────────────────────────────
    InitStateChanged { state: InitState },

    PromptShown { prompt: Prompt },

    // ─────────────────────────────────────────────────────────
    // Backend
    // ─────────────────────────────────────────────────────────
    Notification { toast: Toast },

    AccountsUpdated { snapshot: AccountStatusSnapshot },

    ConnectionChanged { state: ConnectionState },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PageLoaded { .. } => "page_loaded",
            Self::LogEntry { .. } => "log_entry",
            Self::LogBatch { .. } => "log_batch",
            Self::LogCleared => "log_cleared",
            Self::InitStateChanged { .. } => "init_state",
            Self::PromptShown { .. } => "prompt",
            Self::Notification { .. } => "notification",
            Self::AccountsUpdated { .. } => "accounts",
            Self::ConnectionChanged { .. } => "connection",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::PageLoaded {
                page: Page::Dashboard
            }
            .event_type(),
            "page_loaded"
        );
        assert_eq!(
            EngineEvent::InitStateChanged {
                state: InitState::Failed
            }
            .event_type(),
            "init_state"
        );
        assert_eq!(
            EngineEvent::ConnectionChanged {
                state: ConnectionState::Open
            }
            .event_type(),
            "connection"
        );
    }

    #[test]
    fn test_engine_event_clone() {
        let event = EngineEvent::LogEntry {
            entry: LogEntry::from_line("[a] [LIKE] [SUCCESS] ok"),
        };
        assert_eq!(event.clone().event_type(), "log_entry");
    }
}
