//! Custom widget components

mod accounts;
mod action_form;
mod header;
mod init_panel;
mod key_hints;
mod log_view;
pub mod modal_overlay;
mod prompt_dialog;
mod text;
mod toasts;

pub use accounts::AccountsPanel;
pub use action_form::ActionFormView;
pub use header::MainHeader;
pub use init_panel::InitPanel;
pub use key_hints::KeyHints;
pub use log_view::LogView;
pub use prompt_dialog::PromptDialog;
pub use toasts::ToastStack;

// Re-export state types from app layer (these are used by render/)
pub use igpanel_app::log_view_state::LogViewState;
