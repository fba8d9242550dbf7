//! Configuration loading
//!
//! - `types`: `Settings` and its sections
//! - `settings`: config file discovery, loading and default file creation

mod settings;
mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::{InitSettings, PollSettings, ServerSettings, Settings, StreamSettings, UiSettings};
