//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the message channel, the log stream client, the status
//! poller and the page lifecycle. Loading a page always runs the same
//! sequence:
//!
//! 1. Unload: close the stream, drop its subscribers, abort page tasks
//! 2. Reset per-page state and bump the generation
//! 3. Subscribe the page's stream bridge and open the stream
//! 4. Check `/api/status` once (and poll accounts on the dashboard)
//!
//! At most one stream connection exists at any time because the same
//! [`StreamClient`] is reused for every page.

use std::sync::Arc;

use igpanel_client::{
    ActionGateway, ActionTransport, BackendClient, ConnectionState, HttpLogTransport,
    LogTransport, StatusSource, StreamClient, StreamStats,
};
use igpanel_core::prelude::*;
use igpanel_core::{InitState, Page, SharedClock, SystemClock};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::actions::ActionContext;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::log_sink::Placeholder;
use crate::message::Message;
use crate::notify::Prompt;
use crate::process;
use crate::signals;
use crate::state::{AppPhase, AppState};
use crate::status_poller::StatusPoller;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: AppPhase,
    generation: u64,
    page: Page,
    log_count: usize,
    placeholder: Option<Placeholder>,
    init_state: InitState,
    prompt: Option<Prompt>,
    next_toast_id: u64,
    accounts_revision: u64,
    connection: ConnectionState,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            generation: state.generation,
            page: state.page,
            log_count: state.log_sink.len(),
            placeholder: state.log_sink.placeholder(),
            init_state: state.init.state(),
            prompt: state.prompt.clone(),
            next_toast_id: state.toasts.next_id(),
            accounts_revision: state.accounts_revision,
            connection: state.connection,
        }
    }
}

/// Orchestration engine for the control panel.
pub struct Engine<S = BackendClient, A = BackendClient, T = HttpLogTransport> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    stream: StreamClient<T>,
    poller: StatusPoller<S>,
    gateway: ActionGateway<A>,

    /// Stream bridge, status check and polling tasks of the current page
    page_tasks: Vec<JoinHandle<()>>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine talking to the configured backend over HTTP.
    ///
    /// Spawns the signal handler, so this must run inside a Tokio runtime.
    /// No page is loaded until [`Engine::start`].
    pub fn new(settings: Settings) -> Result<Self> {
        let backend = BackendClient::new(
            &settings.server.base_url,
            settings.server.request_timeout(),
        )?;
        let transport = backend.log_transport()?;
        let backend = Arc::new(backend);

        let engine = Self::with_services(
            settings,
            Arc::new(SystemClock),
            Arc::clone(&backend),
            backend,
            transport,
        );
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }
}

impl<S, A, T> Engine<S, A, T>
where
    S: StatusSource + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    T: LogTransport + Send + Sync + 'static,
{
    /// Create an Engine over explicit backend services
    pub fn with_services(
        settings: Settings,
        clock: SharedClock,
        status: Arc<S>,
        actions: Arc<A>,
        transport: T,
    ) -> Self {
        let stream =
            StreamClient::new(transport).with_reconnect_delay(settings.stream.reconnect_delay());
        let state = AppState::with_clock(settings, clock);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            stream,
            poller: StatusPoller::new(status),
            gateway: ActionGateway::from_shared(actions),
            page_tasks: Vec::new(),
            event_tx,
        }
    }

    /// Load the first page
    pub fn start(&mut self, page: Page) {
        let pre = StateSnapshot::capture(&self.state);
        self.load_page(page);
        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Runs navigation requested by the message chain and emits
    /// EngineEvents for the state changes.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        self.state.connection = self.stream.connection_state();

        let ctx = ActionContext {
            msg_tx: &self.msg_tx,
            poller: &self.poller,
            gateway: &self.gateway,
            generation: self.state.generation,
        };
        let navigation = process::process_message(&mut self.state, msg, &ctx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);

        if let Some(page) = navigation {
            self.load_page(page);
            let loaded = StateSnapshot::capture(&self.state);
            self.emit_events(&post, &loaded);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.stream.connection_state()
    }

    pub fn stream_stats(&self) -> &StreamStats {
        self.stream.stats()
    }

    /// Unload the current page and signal background tasks to stop.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.unload_page();
        let _ = self.shutdown_tx.send(true);
        info!("Engine shut down");
    }

    // ─────────────────────────────────────────────────────────
    // Page lifecycle
    // ─────────────────────────────────────────────────────────

    fn unload_page(&mut self) {
        self.stream.close();
        self.stream.clear_subscribers();
        for task in self.page_tasks.drain(..) {
            task.abort();
        }
    }

    fn load_page(&mut self, page: Page) {
        self.unload_page();
        self.state.load_page(page);
        let generation = self.state.generation;
        info!("Loading {} (generation {})", page.route(), generation);

        // Observers run on the stream task; the bridge hands lines over to
        // the message loop in delivery order
        let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
        self.stream.subscribe(move |line: &str| {
            let _ = line_tx.send(line.to_string());
        });
        let msg_tx = self.msg_tx.clone();
        self.page_tasks.push(tokio::spawn(async move {
            while let Some(line) = line_rx.recv().await {
                if msg_tx
                    .send(Message::StreamLog { generation, line })
                    .await
                    .is_err()
                {
                    break;
                }
            }
        }));
        self.stream.open();
        self.state.connection = self.stream.connection_state();

        self.page_tasks.push(
            self.poller
                .spawn_status_check(generation, self.msg_tx.clone()),
        );
        if page == Page::Dashboard {
            let period = self.state.settings.poll.accounts_interval();
            self.page_tasks.push(self.poller.spawn_polling(
                generation,
                period,
                self.msg_tx.clone(),
            ));
        }
    }

    // ─────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.connection != post.connection {
            self.emit(EngineEvent::ConnectionChanged {
                state: post.connection,
            });
        }

        for toast in self.state.toasts.since(pre.next_toast_id) {
            self.emit(EngineEvent::Notification {
                toast: toast.clone(),
            });
        }

        if pre.generation != post.generation {
            self.emit(EngineEvent::PageLoaded { page: post.page });
            return;
        }

        if post.placeholder == Some(Placeholder::Cleared)
            && pre.placeholder != Some(Placeholder::Cleared)
        {
            self.emit(EngineEvent::LogCleared);
        }

        // Counts only shrink on clear, and a clear starts from zero
        let known = if post.log_count < pre.log_count || pre.placeholder != post.placeholder {
            0
        } else {
            pre.log_count
        };
        if post.log_count > known {
            let entries = &self.state.log_sink.entries()[known..];
            if entries.len() > 1 {
                self.emit(EngineEvent::LogBatch {
                    entries: entries.to_vec(),
                });
            } else if let Some(entry) = entries.first() {
                self.emit(EngineEvent::LogEntry {
                    entry: entry.clone(),
                });
            }
        }

        if pre.init_state != post.init_state {
            self.emit(EngineEvent::InitStateChanged {
                state: post.init_state,
            });
        }

        if let Some(prompt) = &post.prompt {
            if pre.prompt.as_ref() != Some(prompt) {
                self.emit(EngineEvent::PromptShown {
                    prompt: prompt.clone(),
                });
            }
        }

        if pre.accounts_revision != post.accounts_revision {
            if let Some(snapshot) = &self.state.accounts {
                self.emit(EngineEvent::AccountsUpdated {
                    snapshot: snapshot.clone(),
                });
            }
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
