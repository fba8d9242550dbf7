//! Application state (Model in TEA pattern)

use std::sync::Arc;
use std::time::Instant;

use igpanel_client::ConnectionState;
use igpanel_core::{AccountStatusSnapshot, Page, SharedClock, SystemClock};

use crate::config::Settings;
use crate::form::ActionForm;
use crate::init_detector::InitDetector;
use crate::log_sink::LogSink;
use crate::notify::{Prompt, ToastKind, ToastQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Consumers of the log stream on a page, in delivery order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageObserver {
    LogSink,
    InitDetector,
}

impl PageObserver {
    pub fn for_page(page: Page) -> &'static [PageObserver] {
        match page {
            Page::Init => &[PageObserver::LogSink, PageObserver::InitDetector],
            Page::Dashboard => &[PageObserver::LogSink],
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Page currently shown
    pub page: Page,

    /// Incremented on every page load. Async results carry the generation
    /// they were started under and are dropped when it no longer matches.
    pub generation: u64,

    /// Log for the current page
    pub log_sink: LogSink,

    /// Init page only; reset on every load
    pub init: InitDetector,

    /// Whether the init page accepts a new initialization request
    pub init_trigger_enabled: bool,

    /// A `POST /api/init` is outstanding
    pub init_in_flight: bool,

    /// Latest account list (dashboard only)
    pub accounts: Option<AccountStatusSnapshot>,

    /// Bumped whenever `accounts` is replaced, including with equal data
    pub accounts_revision: u64,

    pub form: ActionForm,

    /// Action requests sent and not yet answered
    pub pending_actions: usize,

    /// Survive navigation so results of earlier requests still show
    pub toasts: ToastQueue,

    pub prompt: Option<Prompt>,

    /// Mirrored from the stream client by the engine
    pub connection: ConnectionState,

    pub settings: Settings,

    clock: SharedClock,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(settings: Settings, clock: SharedClock) -> Self {
        let init = InitDetector::new(
            settings.init.prompt_delay(),
            settings.init.redirect_delay(),
        );
        let toasts = ToastQueue::new(settings.ui.toast_duration());

        Self {
            phase: AppPhase::Running,
            page: Page::Init,
            generation: 0,
            log_sink: LogSink::new(),
            init,
            init_trigger_enabled: true,
            init_in_flight: false,
            accounts: None,
            accounts_revision: 0,
            form: ActionForm::new(),
            pending_actions: 0,
            toasts,
            prompt: None,
            connection: ConnectionState::Idle,
            settings,
            clock,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Replace all per-page state for a fresh load of `page`
    pub fn load_page(&mut self, page: Page) {
        self.page = page;
        self.generation += 1;
        self.log_sink = LogSink::new();
        self.init = InitDetector::new(
            self.settings.init.prompt_delay(),
            self.settings.init.redirect_delay(),
        );
        self.init_trigger_enabled = true;
        self.init_in_flight = false;
        self.accounts = None;
        self.form = ActionForm::new();
        self.prompt = None;
    }

    pub fn observers(&self) -> &'static [PageObserver] {
        PageObserver::for_page(self.page)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Show a toast stamped with the current time
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        let now = self.now();
        self.toasts.push(kind, message, now);
    }

    pub fn set_accounts(&mut self, snapshot: AccountStatusSnapshot) {
        self.accounts = Some(snapshot);
        self.accounts_revision += 1;
    }
}
