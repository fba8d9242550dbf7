//! Live log stream client
//!
//! [`StreamClient`] keeps one push connection to the backend open for the
//! lifetime of a page. A background task owns the connection, decodes each
//! payload and hands `log` lines to the subscribed observers. When the
//! transport fails the task waits a fixed delay and connects again, forever,
//! until [`StreamClient::close`] is called.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use futures_util::StreamExt;
use igpanel_core::prelude::*;
use igpanel_core::StreamMessage;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::transport::{LogTransport, PayloadStream};

/// Delay between a transport failure and the next connection attempt
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Current connection state of a [`StreamClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Never opened.
    #[default]
    Idle,
    /// Connection attempt in progress.
    Connecting,
    /// Connected and receiving messages.
    Open,
    /// Connection lost; waiting out the reconnect delay.
    ClosedPendingRetry,
    /// Closed on request; no reconnect will follow.
    Closed,
}

impl ConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "idle",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "live",
            ConnectionState::ClosedPendingRetry => "reconnecting",
            ConnectionState::Closed => "closed",
        }
    }
}

/// Receives log lines in arrival order
///
/// Observers run synchronously on the stream task and must not block.
pub trait LogObserver: Send {
    fn on_log(&mut self, line: &str);
}

impl<F> LogObserver for F
where
    F: FnMut(&str) + Send,
{
    fn on_log(&mut self, line: &str) {
        self(line)
    }
}

/// Connection counters, shared with the background task
#[derive(Debug, Default)]
pub struct StreamStats {
    open_connections: AtomicUsize,
    connect_attempts: AtomicU64,
    reconnects_scheduled: AtomicU64,
    lines_delivered: AtomicU64,
}

impl StreamStats {
    /// Connections currently held open
    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }

    pub fn connect_attempts(&self) -> u64 {
        self.connect_attempts.load(Ordering::SeqCst)
    }

    pub fn reconnects_scheduled(&self) -> u64 {
        self.reconnects_scheduled.load(Ordering::SeqCst)
    }

    pub fn lines_delivered(&self) -> u64 {
        self.lines_delivered.load(Ordering::SeqCst)
    }

    fn connection_opened(self: &Arc<Self>) -> OpenConnectionGuard {
        self.open_connections.fetch_add(1, Ordering::SeqCst);
        OpenConnectionGuard {
            stats: Arc::clone(self),
        }
    }
}

/// Decrements the open connection gauge when the connection is dropped
struct OpenConnectionGuard {
    stats: Arc<StreamStats>,
}

impl Drop for OpenConnectionGuard {
    fn drop(&mut self) {
        self.stats.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

type Observers = Arc<Mutex<Vec<Box<dyn LogObserver>>>>;
type SharedState = Arc<RwLock<ConnectionState>>;

struct RunningTask {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

// ---------------------------------------------------------------------------
// StreamClient
// ---------------------------------------------------------------------------

/// Reconnecting client for the backend log stream.
///
/// At most one connection exists at a time: [`open`](Self::open) closes the
/// previous connection and the new task waits for the old one to be torn
/// down before connecting.
pub struct StreamClient<T> {
    transport: Arc<T>,
    reconnect_delay: Duration,
    observers: Observers,
    state: SharedState,
    stats: Arc<StreamStats>,
    task: Option<RunningTask>,
    /// Task stopped by `close()` that may still be unwinding
    retired: Option<JoinHandle<()>>,
}

impl<T> std::fmt::Debug for StreamClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamClient")
            .field("state", &self.connection_state())
            .field("reconnect_delay", &self.reconnect_delay)
            .field("running", &self.task.is_some())
            .finish()
    }
}

impl<T> StreamClient<T>
where
    T: LogTransport + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            reconnect_delay: RECONNECT_DELAY,
            observers: Arc::new(Mutex::new(Vec::new())),
            state: Arc::new(RwLock::new(ConnectionState::Idle)),
            stats: Arc::new(StreamStats::default()),
            task: None,
            retired: None,
        }
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    /// Start streaming, closing any existing connection first.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(&mut self) {
        let previous = match self.task.take() {
            Some(task) => {
                debug!("Log stream: replacing existing connection");
                Some(stop_task(task))
            }
            None => self.retired.take(),
        };

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        set_state(&self.state, ConnectionState::Connecting);

        let handle = tokio::spawn(run_stream_task(
            Arc::clone(&self.transport),
            Arc::clone(&self.observers),
            Arc::clone(&self.state),
            Arc::clone(&self.stats),
            self.reconnect_delay,
            shutdown_rx,
            previous,
        ));

        self.task = Some(RunningTask {
            shutdown_tx,
            handle,
        });
    }

    /// Close the connection and cancel any pending reconnect.
    ///
    /// Idempotent; a client that was never opened stays idle.
    pub fn close(&mut self) {
        if let Some(task) = self.task.take() {
            info!("Log stream: closing {}", self.transport.describe());
            self.retired = Some(stop_task(task));
            set_state(&self.state, ConnectionState::Closed);
        }
    }
}

impl<T> StreamClient<T> {
    /// Register an observer. Observers are called in registration order.
    pub fn subscribe(&self, observer: impl LogObserver + 'static) {
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Box::new(observer));
    }

    /// Drop every registered observer
    pub fn clear_subscribers(&self) {
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn connection_state(&self) -> ConnectionState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }
}

impl<T> Drop for StreamClient<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            stop_task(task);
        }
    }
}

fn stop_task(task: RunningTask) -> JoinHandle<()> {
    let _ = task.shutdown_tx.send(true);
    task.handle.abort();
    task.handle
}

fn set_state(state: &SharedState, next: ConnectionState) {
    let mut guard = state.write().unwrap_or_else(|e| e.into_inner());
    *guard = next;
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

/// Why a connection's read loop returned
enum ReadOutcome {
    Shutdown,
    ConnectionLost,
}

async fn run_stream_task<T>(
    transport: Arc<T>,
    observers: Observers,
    state: SharedState,
    stats: Arc<StreamStats>,
    reconnect_delay: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
    previous: Option<JoinHandle<()>>,
) where
    T: LogTransport + Send + Sync + 'static,
{
    if let Some(previous) = previous {
        // resolves once the old task has been dropped, connection included
        let _ = previous.await;
    }

    let target = transport.describe();

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        set_state(&state, ConnectionState::Connecting);
        stats.connect_attempts.fetch_add(1, Ordering::SeqCst);

        let connected = tokio::select! {
            biased;
            _ = shutdown_rx.changed() => break,
            result = transport.connect() => result,
        };

        match connected {
            Ok(payloads) => {
                let _guard = stats.connection_opened();
                set_state(&state, ConnectionState::Open);
                info!("Log stream: connected to {}", target);

                match read_payloads(payloads, &observers, &stats, &mut shutdown_rx).await {
                    ReadOutcome::Shutdown => break,
                    ReadOutcome::ConnectionLost => {}
                }
            }
            Err(err) if err.is_recoverable() => {
                warn!("Log stream: connection to {} failed: {}", target, err);
            }
            Err(err) => {
                error!("Log stream: cannot connect to {}: {}", target, err);
            }
        }

        set_state(&state, ConnectionState::ClosedPendingRetry);
        stats.reconnects_scheduled.fetch_add(1, Ordering::SeqCst);
        debug!("Log stream: reconnecting in {:?}", reconnect_delay);

        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => break,
            _ = tokio::time::sleep(reconnect_delay) => {}
        }
    }

    set_state(&state, ConnectionState::Closed);
    debug!("Log stream task exiting");
}

async fn read_payloads(
    mut payloads: PayloadStream,
    observers: &Observers,
    stats: &StreamStats,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> ReadOutcome {
    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => return ReadOutcome::Shutdown,
            payload = payloads.next() => match payload {
                Some(Ok(data)) => dispatch_payload(&data, observers, stats),
                Some(Err(err)) => {
                    warn!("Log stream: read error: {}", err);
                    return ReadOutcome::ConnectionLost;
                }
                None => {
                    warn!("Log stream: connection closed by server");
                    return ReadOutcome::ConnectionLost;
                }
            },
        }
    }
}

fn dispatch_payload(data: &str, observers: &Observers, stats: &StreamStats) {
    let Some(message) = StreamMessage::parse(data) else {
        debug!("Log stream: dropping malformed payload: {}", data);
        return;
    };

    let Some(line) = message.log_line() else {
        trace!("Log stream: payload without log line");
        return;
    };

    stats.lines_delivered.fetch_add(1, Ordering::SeqCst);
    let mut observers = observers.lock().unwrap_or_else(|e| e.into_inner());
    for observer in observers.iter_mut() {
        observer.on_log(line);
    }
}
