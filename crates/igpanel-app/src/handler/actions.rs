//! Operator actions and their results
//!
//! Every submitted action ends in exactly one toast: a warning when the
//! inputs fail validation (and nothing is sent), otherwise the outcome of
//! the request once it comes back.

use igpanel_client::{ActionKind, ActionRequest};
use igpanel_core::prelude::*;
use igpanel_core::{ActionOutcome, Page};

use crate::form::build_request;
use crate::notify::ToastKind;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_start_init(state: &mut AppState) -> UpdateResult {
    if state.page != Page::Init {
        return UpdateResult::none();
    }
    if !state.init_trigger_enabled || state.init_in_flight {
        debug!("Initialization trigger is disabled, ignoring");
        return UpdateResult::none();
    }

    state.init_trigger_enabled = false;
    state.init_in_flight = true;
    send(state, ActionRequest::Init)
}

pub fn handle_submit_action(state: &mut AppState, kind: ActionKind) -> UpdateResult {
    if kind == ActionKind::Init {
        return handle_start_init(state);
    }
    if state.page != Page::Dashboard {
        return UpdateResult::none();
    }

    match state.form.request(kind) {
        Ok(request) => send(state, request),
        Err(err) => {
            state.notify(ToastKind::Warning, err.message());
            UpdateResult::none()
        }
    }
}

pub fn handle_submit_with(
    state: &mut AppState,
    kind: ActionKind,
    username: &str,
    url: &str,
    comment: &str,
) -> UpdateResult {
    if kind == ActionKind::Init {
        return handle_start_init(state);
    }
    if state.page != Page::Dashboard {
        state.notify(
            ToastKind::Warning,
            format!("{} is only available on the dashboard", kind.label()),
        );
        return UpdateResult::none();
    }

    match build_request(kind, username, url, comment) {
        Ok(request) => send(state, request),
        Err(err) => {
            state.notify(ToastKind::Warning, err.message());
            UpdateResult::none()
        }
    }
}

pub fn handle_action_completed(
    state: &mut AppState,
    kind: ActionKind,
    outcome: ActionOutcome,
) -> UpdateResult {
    state.pending_actions = state.pending_actions.saturating_sub(1);
    let now = state.now();
    state.toasts.push_outcome(&outcome, now);

    if kind == ActionKind::Init && state.page == Page::Init {
        state.init_in_flight = false;
        // Nothing runs on the backend after a failed request
        if !outcome.success && !state.init.state().is_terminal() {
            state.init_trigger_enabled = true;
        }
    }

    UpdateResult::none()
}

fn send(state: &mut AppState, request: ActionRequest) -> UpdateResult {
    info!("Submitting {}", request.kind().label());
    state.pending_actions += 1;
    UpdateResult::action(UpdateAction::SendAction(request))
}
