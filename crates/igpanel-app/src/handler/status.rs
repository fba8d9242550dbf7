//! Status check and account list results

use igpanel_core::prelude::*;
use igpanel_core::{AccountStatusSnapshot, Page};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Page to move to after a status check on `page`, if any
///
/// The dashboard is only usable after initialization and the init page is
/// pointless once it has happened.
pub fn redirect_for(page: Page, initialized: bool) -> Option<Page> {
    match (page, initialized) {
        (Page::Dashboard, false) => Some(Page::Init),
        (Page::Init, true) => Some(Page::Dashboard),
        _ => None,
    }
}

pub fn handle_status_checked(
    state: &mut AppState,
    generation: u64,
    initialized: Option<bool>,
) -> UpdateResult {
    if generation != state.generation {
        return UpdateResult::none();
    }

    let Some(initialized) = initialized else {
        debug!("Status check gave no initialization flag, staying on {}", state.page);
        return UpdateResult::none();
    };

    match redirect_for(state.page, initialized) {
        Some(target) => {
            info!(
                "Backend initialized={}, redirecting {} -> {}",
                initialized, state.page, target
            );
            UpdateResult::action(UpdateAction::Navigate(target))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_accounts_fetched(
    state: &mut AppState,
    generation: u64,
    snapshot: AccountStatusSnapshot,
) -> UpdateResult {
    if generation != state.generation || state.page != Page::Dashboard {
        return UpdateResult::none();
    }

    debug!(
        "Account list: {} accounts, {} logged in",
        snapshot.accounts.len(),
        snapshot.logged_in_count()
    );
    state.set_accounts(snapshot);
    UpdateResult::none()
}

pub fn handle_refresh_accounts(state: &mut AppState) -> UpdateResult {
    if state.page != Page::Dashboard {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::FetchAccounts)
}
