//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `stream`: Log stream delivery and timed init transitions
//! - `status`: Status check and account list results
//! - `actions`: Operator actions and their results
//! - `scroll`: Scroll handlers

pub(crate) mod actions;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod status;
pub(crate) mod stream;
pub(crate) mod update;


use igpanel_client::ActionRequest;
use igpanel_core::Page;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;
pub use status::redirect_for;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// POST a validated action request
    SendAction(ActionRequest),

    /// Fetch the account list once, outside the polling schedule
    FetchAccounts,

    /// Tear down the current page and load another
    Navigate(Page),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
