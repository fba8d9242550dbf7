//! igpanel - terminal control panel for an account automation backend
//!
//! Re-exports the front ends so the binary stays thin. The domain lives in
//! the workspace crates:
//!
//! - `igpanel-core`: domain types, classification, errors, logging
//! - `igpanel-client`: HTTP backend, log stream, action gateway
//! - `igpanel-app`: TEA state, engine, init detection, status polling
//! - `igpanel-tui`: ratatui front end

pub mod headless;

pub use headless::run_headless;
pub use igpanel_tui::run as run_tui;
