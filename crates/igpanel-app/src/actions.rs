//! Action handlers: UpdateAction dispatch and background task spawning

use igpanel_client::{ActionGateway, ActionRequest, ActionTransport, StatusSource};
use igpanel_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::status_poller::StatusPoller;

/// Services background actions need
pub struct ActionContext<'a, S, A> {
    pub msg_tx: &'a mpsc::Sender<Message>,
    pub poller: &'a StatusPoller<S>,
    pub gateway: &'a ActionGateway<A>,
    /// Page load the actions are started under
    pub generation: u64,
}

/// Execute an action by spawning a background task
///
/// `Navigate` is not handled here; the engine owns page loading.
pub fn handle_action<S, A>(action: UpdateAction, ctx: &ActionContext<'_, S, A>)
where
    S: StatusSource + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
{
    match action {
        UpdateAction::SendAction(request) => {
            spawn_send_action(request, ctx.gateway.clone(), ctx.msg_tx.clone());
        }

        UpdateAction::FetchAccounts => {
            ctx.poller
                .spawn_accounts_fetch(ctx.generation, ctx.msg_tx.clone());
        }

        UpdateAction::Navigate(page) => {
            warn!("Navigation to {} reached the action dispatcher", page);
        }
    }
}

fn spawn_send_action<A>(
    request: ActionRequest,
    gateway: ActionGateway<A>,
    msg_tx: mpsc::Sender<Message>,
) where
    A: ActionTransport + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let kind = request.kind();
        let outcome = gateway.dispatch(&request).await;
        if msg_tx
            .send(Message::ActionCompleted { kind, outcome })
            .await
            .is_err()
        {
            debug!("{} finished after shutdown", kind.label());
        }
    });
}
