//! Log stream delivery and timed init transitions

use igpanel_core::prelude::*;
use igpanel_core::Page;

use crate::init_detector::InitEffect;
use crate::notify::Prompt;
use crate::state::{AppState, PageObserver};

use super::{UpdateAction, UpdateResult};

/// Deliver one stream line to the current page's observers, in order
pub fn handle_stream_log(state: &mut AppState, generation: u64, line: &str) -> UpdateResult {
    if generation != state.generation {
        trace!(
            "Dropping log line from page load {} (current {})",
            generation,
            state.generation
        );
        return UpdateResult::none();
    }

    let now = state.now();
    for observer in state.observers() {
        match observer {
            PageObserver::LogSink => {
                state.log_sink.append_line(line);
            }
            PageObserver::InitDetector => {
                if state.init.on_log(line, now) {
                    info!("Initialization finished: {:?}", state.init.state());
                    state.init_trigger_enabled = false;
                }
            }
        }
    }

    // Zero delays take effect without waiting for the next tick
    run_init_timers(state)
}

pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    state.toasts.expire(now);
    run_init_timers(state)
}

pub fn handle_clear_logs(state: &mut AppState) -> UpdateResult {
    state.log_sink.clear();
    UpdateResult::none()
}

fn run_init_timers(state: &mut AppState) -> UpdateResult {
    if state.page != Page::Init || state.init.next_deadline().is_none() {
        return UpdateResult::none();
    }

    let now = state.now();
    let mut result = UpdateResult::none();
    for effect in state.init.poll(now) {
        match effect {
            InitEffect::ShowSuccessPrompt => state.prompt = Some(Prompt::init_succeeded()),
            InitEffect::ShowFailurePrompt => state.prompt = Some(Prompt::init_failed()),
            InitEffect::EnableInitTrigger => state.init_trigger_enabled = true,
            InitEffect::NavigateToDashboard => {
                info!("Initialization complete, opening dashboard");
                result = UpdateResult::action(UpdateAction::Navigate(Page::Dashboard));
            }
        }
    }
    result
}
