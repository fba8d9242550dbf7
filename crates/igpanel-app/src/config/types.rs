//! Configuration types for igpanel
//!
//! `Settings` mirrors `config.toml`; every field has a default so a partial
//! file (or none at all) is valid.

use std::time::Duration;

use igpanel_client::DEFAULT_SERVER_URL;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub stream: StreamSettings,

    #[serde(default)]
    pub poll: PollSettings,

    #[serde(default)]
    pub init: InitSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the automation backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for status and action requests (not the log stream)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Floor for `request_timeout_ms`; zero would fail every request
const MIN_REQUEST_TIMEOUT_MS: u64 = 500;

/// Floor for `reconnect_delay_ms`; zero would reconnect in a tight loop
const MIN_RECONNECT_DELAY_MS: u64 = 250;

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(MIN_REQUEST_TIMEOUT_MS))
    }
}

fn default_base_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Log stream behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreamSettings {
    /// Fixed delay before reconnecting after the stream drops
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: default_reconnect_delay_ms(),
        }
    }
}

impl StreamSettings {
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms.max(MIN_RECONNECT_DELAY_MS))
    }
}

fn default_reconnect_delay_ms() -> u64 {
    5_000
}

/// Account status polling on the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PollSettings {
    #[serde(default = "default_accounts_interval_secs")]
    pub accounts_interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            accounts_interval_secs: default_accounts_interval_secs(),
        }
    }
}

impl PollSettings {
    /// Never zero; a zero interval would spin the poller
    pub fn accounts_interval(&self) -> Duration {
        Duration::from_secs(self.accounts_interval_secs.max(1))
    }
}

fn default_accounts_interval_secs() -> u64 {
    30
}

/// Timed transitions after initialization finishes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InitSettings {
    /// Delay between the terminal log line and the prompt
    #[serde(default = "default_prompt_delay_ms")]
    pub prompt_delay_ms: u64,

    /// Delay between the success prompt and the move to the dashboard
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            prompt_delay_ms: default_prompt_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl InitSettings {
    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

fn default_prompt_delay_ms() -> u64 {
    1_000
}

fn default_redirect_delay_ms() -> u64 {
    2_000
}

/// Presentation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a notification stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Prefix log lines with the local receive time
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            show_timestamps: true,
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_toast_duration_ms() -> u64 {
    4_000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://localhost:5000");
        assert_eq!(settings.stream.reconnect_delay(), Duration::from_secs(5));
        assert_eq!(settings.poll.accounts_interval(), Duration::from_secs(30));
        assert_eq!(settings.init.prompt_delay(), Duration::from_millis(1000));
        assert_eq!(settings.init.redirect_delay(), Duration::from_millis(2000));
        assert!(settings.ui.show_timestamps);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            base_url = "http://10.0.0.5:8080"

            [init]
            redirect_delay_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.base_url, "http://10.0.0.5:8080");
        assert_eq!(settings.server.request_timeout_ms, 10_000);
        assert_eq!(settings.init.redirect_delay_ms, 500);
        assert_eq!(settings.init.prompt_delay_ms, 1_000);
        assert_eq!(settings.poll.accounts_interval_secs, 30);
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let poll = PollSettings {
            accounts_interval_secs: 0,
        };
        assert_eq!(poll.accounts_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_reconnect_delay_and_timeout_are_clamped() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            request_timeout_ms = 0

            [stream]
            reconnect_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(settings.stream.reconnect_delay(), Duration::from_millis(250));
        assert_eq!(settings.server.request_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_reconnect_delay_above_floor_kept() {
        let stream = StreamSettings {
            reconnect_delay_ms: 1_500,
        };
        assert_eq!(stream.reconnect_delay(), Duration::from_millis(1_500));
    }
}
