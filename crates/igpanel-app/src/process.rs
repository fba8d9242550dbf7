//! Message processing
//!
//! Runs the TEA update loop for one message and its follow-ups, dispatching
//! background actions as they come up. Navigation is returned to the caller
//! because loading a page needs the stream client the engine owns.

use igpanel_client::{ActionTransport, StatusSource};
use igpanel_core::Page;

use crate::actions::{handle_action, ActionContext};
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Returns the page to load next, if the message chain requested one.
pub fn process_message<S, A>(
    state: &mut AppState,
    message: Message,
    ctx: &ActionContext<'_, S, A>,
) -> Option<Page>
where
    S: StatusSource + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
{
    let mut navigation = None;

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            match action {
                UpdateAction::Navigate(page) => navigation = Some(page),
                other => handle_action(other, ctx),
            }
        }

        msg = result.message;
    }

    navigation
}
