//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI (or to NDJSON output in headless mode),
//! so diagnostics only ever go to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "IGPANEL_LOG";

const LOG_FILE_NAME: &str = "igpanel.log";
const DEFAULT_FILTER: &str = "igpanel=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/igpanel/logs/`.
/// Log level is controlled by the `IGPANEL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// IGPANEL_LOG=debug igpanel
/// IGPANEL_LOG=igpanel_client=trace igpanel --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("igpanel {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("igpanel").join("logs")
}

/// Path of the log file, shown in `--help` output and the headless banner
pub fn current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_directory() {
        let path = current_log_file();
        assert!(path.ends_with("igpanel/logs/igpanel.log"));
    }
}
