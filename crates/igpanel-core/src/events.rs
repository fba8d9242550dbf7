//! Backend wire payloads
//!
//! JSON shapes exchanged with the automation backend: log stream messages,
//! the status report and action responses.

use serde::{Deserialize, Serialize};

use crate::types::{AccountStatus, AccountStatusSnapshot};

/// One `data:` payload from the `/api/logs` event stream
///
/// Besides log lines the backend emits `{"keepalive": true}` once a second
/// while idle, which carries no `log` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StreamMessage {
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub keepalive: bool,
}

impl StreamMessage {
    /// Parse a stream payload. Anything that is not a JSON object is `None`.
    pub fn parse(data: &str) -> Option<Self> {
        serde_json::from_str(data.trim()).ok()
    }

    /// The log line, if the message carries a non-empty one
    pub fn log_line(&self) -> Option<&str> {
        self.log.as_deref().filter(|line| !line.is_empty())
    }
}

/// Response of `GET /api/status`
///
/// `initialized` is absent when the backend has no manager at all, which
/// also comes with `success: false` and an explanatory message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub initialized: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub accounts: Vec<AccountStatus>,
}

impl StatusResponse {
    /// Convert into the snapshot the dashboard renders
    pub fn into_snapshot(self) -> AccountStatusSnapshot {
        AccountStatusSnapshot {
            initialized: self.initialized.unwrap_or(false),
            accounts: self.accounts,
            message: self.message,
        }
    }
}

/// Response of every `POST /api/*` action endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ActionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
