//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use igpanel_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "igpanel";

const DEFAULT_CONFIG: &str = r#"# igpanel configuration

[server]
# Base URL of the automation backend
base_url = "http://localhost:5000"
# Timeout for status and action requests, in milliseconds
request_timeout_ms = 10000

[stream]
# Fixed delay before the log stream reconnects, in milliseconds
reconnect_delay_ms = 5000

[poll]
# Dashboard account status refresh interval, in seconds
accounts_interval_secs = 30

[init]
# Delay before showing the result prompt after initialization finishes
prompt_delay_ms = 1000
# Delay between the success prompt and opening the dashboard
redirect_delay_ms = 2000

[ui]
# How long notifications stay visible, in milliseconds
toast_duration_ms = 4000
# Prefix log lines with the local receive time
show_timestamps = true
"#;

/// `<config_dir>/igpanel/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`, falling back to defaults
///
/// A missing file is normal; an unreadable or invalid one is logged.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `path` unless one exists
///
/// Returns whether a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::config(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
