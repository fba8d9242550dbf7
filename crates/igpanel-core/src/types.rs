//! Core domain type definitions

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::classify::classify;

/// Counter for generating unique log entry IDs
static LOG_ENTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Display severity of a log line, derived from its status marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
    Neutral,
}

impl Severity {
    /// Short label used in headless output and compact views
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Neutral => "neutral",
        }
    }
}

/// A classified log line owned by the log view of one page session
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    /// The backend line, verbatim
    pub line: String,
}

impl LogEntry {
    /// Classify a raw backend line and stamp it with the local time
    pub fn from_line(line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            id: LOG_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            timestamp: Local::now(),
            severity: classify(&line),
            line,
        }
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Outcome of backend initialization as observed on the init page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitState {
    #[default]
    Pending,
    Succeeded,
    Failed,
}

impl InitState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InitState::Pending)
    }
}

/// Screens of the panel, each mapped to the route the backend UI used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Initialization screen, route `/`
    #[default]
    Init,
    /// Account dashboard, route `/dashboard`
    Dashboard,
}

impl Page {
    pub fn route(&self) -> &'static str {
        match self {
            Page::Init => "/",
            Page::Dashboard => "/dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Init => "Initialization",
            Page::Dashboard => "Dashboard",
        }
    }

    /// Parse a route or a page name (`init`, `dashboard`)
    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim() {
            "/" | "init" => Some(Page::Init),
            "/dashboard" | "dashboard" => Some(Page::Dashboard),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// One managed account as reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub username: String,
    #[serde(default)]
    pub logged_in: bool,
    /// Free-form status text from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Latest account list; each fetch replaces the previous snapshot wholesale
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountStatusSnapshot {
    pub initialized: bool,
    pub accounts: Vec<AccountStatus>,
    /// Backend explanation when it has no accounts to report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccountStatusSnapshot {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn logged_in_count(&self) -> usize {
        self.accounts.iter().filter(|a| a.logged_in).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_classifies_line() {
        let entry = LogEntry::from_line("[SYSTEM] [INIT] [ERROR] bad proxy");
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.line, "[SYSTEM] [INIT] [ERROR] bad proxy");
    }

    #[test]
    fn test_log_entry_ids_increase() {
        let a = LogEntry::from_line("a");
        let b = LogEntry::from_line("b");
        assert!(b.id > a.id);
    }

    #[test]
    fn test_init_state_terminal() {
        assert!(!InitState::Pending.is_terminal());
        assert!(InitState::Succeeded.is_terminal());
        assert!(InitState::Failed.is_terminal());
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(Page::Init.route(), "/");
        assert_eq!(Page::Dashboard.route(), "/dashboard");
        assert_eq!(Page::from_route("/dashboard"), Some(Page::Dashboard));
        assert_eq!(Page::from_route("init"), Some(Page::Init));
        assert_eq!(Page::from_route("/settings"), None);
    }

    #[test]
    fn test_account_status_defaults_missing_fields() {
        let account: AccountStatus = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert!(!account.logged_in);
        assert_eq!(account.status, None);
    }

    #[test]
    fn test_snapshot_counts_logged_in() {
        let snapshot = AccountStatusSnapshot {
            initialized: true,
            accounts: vec![
                AccountStatus {
                    username: "a".into(),
                    logged_in: true,
                    status: None,
                },
                AccountStatus {
                    username: "b".into(),
                    logged_in: false,
                    status: Some("challenge".into()),
                },
            ],
            message: None,
        };
        assert_eq!(snapshot.logged_in_count(), 1);
        assert!(!snapshot.is_empty());
    }
}
