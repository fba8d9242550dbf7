//! igpanel-tui - Terminal UI for igpanel
//!
//! Creates an Engine from igpanel-app and adds terminal rendering, event
//! polling and the panel's widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
