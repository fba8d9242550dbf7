//! igpanel-app - Application state and orchestration for igpanel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine abstraction shared by the TUI and headless front
//! ends, the per-page log sink and init detector, status polling and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod form;
pub mod handler;
pub mod init_detector;
pub mod input_key;
pub mod log_sink;
pub mod log_view_state;
pub mod message;
pub mod notify;
pub mod process;
pub mod signals;
pub mod state;
pub mod status_poller;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use form::{build_request, ActionForm, FormField, ValidationError};
pub use handler::{UpdateAction, UpdateResult};
pub use init_detector::{InitDetector, InitEffect, FAILURE_PHRASE, READY_PHRASE};
pub use input_key::InputKey;
pub use log_sink::{LogSink, Placeholder};
pub use message::Message;
pub use notify::{Prompt, PromptKind, Toast, ToastKind, ToastQueue};
pub use state::{AppPhase, AppState, PageObserver};
pub use status_poller::StatusPoller;

// Re-export client types the front ends render
pub use igpanel_client::{ActionKind, ConnectionState};
