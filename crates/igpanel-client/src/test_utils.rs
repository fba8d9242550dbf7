//! Test doubles for the backend seams
//!
//! Scripted implementations of [`LogTransport`], [`StatusSource`] and
//! [`ActionTransport`] that record what they were asked to do.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::stream::{self, StreamExt};
use igpanel_core::prelude::*;
use igpanel_core::{AccountStatus, ActionOutcome, StatusResponse};
use serde_json::Value;

use crate::backend::{ActionTransport, StatusSource};
use crate::protocol::Endpoint;
use crate::transport::{LogTransport, PayloadStream};

/// What one `connect()` call does
#[derive(Debug, Clone)]
pub enum ScriptedConnection {
    /// Fail to connect
    Refuse,
    /// Deliver payloads, then either end the connection or stay open
    Payloads { payloads: Vec<String>, hold: bool },
}

impl ScriptedConnection {
    pub fn payloads_then_end(payloads: &[&str]) -> Self {
        Self::Payloads {
            payloads: payloads.iter().map(|p| p.to_string()).collect(),
            hold: false,
        }
    }

    pub fn payloads_then_hold(payloads: &[&str]) -> Self {
        Self::Payloads {
            payloads: payloads.iter().map(|p| p.to_string()).collect(),
            hold: true,
        }
    }
}

#[derive(Debug, Default)]
struct TransportCounters {
    connects: AtomicUsize,
    active: AtomicUsize,
    max_concurrent: AtomicUsize,
}

struct ActiveGuard(Arc<TransportCounters>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Log transport that plays back a fixed list of connections.
///
/// Once the script is exhausted every further connect is refused.
#[derive(Debug, Clone)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<ScriptedConnection>>>,
    counters: Arc<TransportCounters>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<ScriptedConnection>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            counters: Arc::new(TransportCounters::default()),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.counters.connects.load(Ordering::SeqCst)
    }

    /// Connections currently alive (payload stream not yet dropped)
    pub fn active(&self) -> usize {
        self.counters.active.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneously alive connections seen
    pub fn max_concurrent(&self) -> usize {
        self.counters.max_concurrent.load(Ordering::SeqCst)
    }
}

impl LogTransport for ScriptedTransport {
    async fn connect(&self) -> Result<PayloadStream> {
        self.counters.connects.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match next {
            None | Some(ScriptedConnection::Refuse) => {
                Err(Error::stream("connection refused (scripted)"))
            }
            Some(ScriptedConnection::Payloads { payloads, hold }) => {
                let active = self.counters.active.fetch_add(1, Ordering::SeqCst) + 1;
                self.counters
                    .max_concurrent
                    .fetch_max(active, Ordering::SeqCst);
                let guard = ActiveGuard(Arc::clone(&self.counters));

                let items = stream::iter(payloads.into_iter().map(Ok::<String, Error>));
                let body = if hold {
                    items.chain(stream::pending()).boxed()
                } else {
                    items.boxed()
                };
                Ok(body
                    .map(move |item| {
                        let _alive = &guard;
                        item
                    })
                    .boxed())
            }
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

// ─────────────────────────────────────────────────────────────────
// Status source
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct StatusScript {
    /// `None` entries fail the call
    queue: VecDeque<Option<StatusResponse>>,
    fallback: Option<StatusResponse>,
    calls: usize,
}

/// Status source returning queued responses, then a fallback
#[derive(Debug, Clone, Default)]
pub struct MockStatusSource {
    inner: Arc<Mutex<StatusScript>>,
}

impl MockStatusSource {
    /// Every call returns `response`
    pub fn always(response: StatusResponse) -> Self {
        let source = Self::default();
        source.lock().fallback = Some(response);
        source
    }

    /// Every call fails
    pub fn failing() -> Self {
        Self::default()
    }

    /// Calls consume `sequence` in order (`None` = failure), then fail
    pub fn sequence(sequence: Vec<Option<StatusResponse>>) -> Self {
        let source = Self::default();
        source.lock().queue = sequence.into();
        source
    }

    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StatusScript> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StatusSource for MockStatusSource {
    async fn fetch_status(&self) -> Result<StatusResponse> {
        let mut script = self.lock();
        script.calls += 1;
        let next = match script.queue.pop_front() {
            Some(entry) => entry,
            None => script.fallback.clone(),
        };
        next.ok_or_else(|| Error::http("status unavailable (scripted)"))
    }
}

/// Build a successful status response
pub fn status_response(initialized: bool, accounts: &[(&str, bool)]) -> StatusResponse {
    StatusResponse {
        success: true,
        initialized: Some(initialized),
        message: None,
        accounts: accounts
            .iter()
            .map(|(username, logged_in)| AccountStatus {
                username: username.to_string(),
                logged_in: *logged_in,
                status: None,
            })
            .collect(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Action transport
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ActionLog {
    requests: Vec<(Endpoint, Value)>,
    outcome: Option<ActionOutcome>,
}

/// Action transport that records requests and answers with a fixed outcome
#[derive(Debug, Clone, Default)]
pub struct MockActionTransport {
    inner: Arc<Mutex<ActionLog>>,
}

impl MockActionTransport {
    pub fn responding(outcome: ActionOutcome) -> Self {
        let transport = Self::default();
        transport.lock().outcome = Some(outcome);
        transport
    }

    /// Every request fails at the transport level
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(Endpoint, Value)> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ActionLog> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ActionTransport for MockActionTransport {
    async fn post_action(&self, endpoint: Endpoint, body: &Value) -> Result<ActionOutcome> {
        let mut log = self.lock();
        log.requests.push((endpoint, body.clone()));
        log.outcome
            .clone()
            .ok_or_else(|| Error::http("connection refused (scripted)"))
    }
}
