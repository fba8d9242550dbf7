//! Backend status checks and account polling
//!
//! Every page load checks `/api/status` once to decide whether to redirect.
//! The dashboard additionally polls the same endpoint on a fixed period for
//! the account list. Failures only reach the log file; the previous
//! snapshot (if any) stays on screen.

use std::sync::Arc;
use std::time::Duration;

use igpanel_client::StatusSource;
use igpanel_core::prelude::*;
use igpanel_core::AccountStatusSnapshot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::message::Message;

#[derive(Debug)]
pub struct StatusPoller<S> {
    source: Arc<S>,
}

impl<S> Clone for StatusPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> StatusPoller<S>
where
    S: StatusSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Initialization flag, or `None` if the check failed or was inconclusive
    pub async fn fetch_status(&self) -> Option<bool> {
        match self.source.fetch_status().await {
            Ok(response) => {
                if !response.success {
                    debug!(
                        "Status check unsuccessful: {}",
                        response.message.as_deref().unwrap_or("no message")
                    );
                }
                response.initialized
            }
            Err(e) => {
                log_failure("Status check", &e);
                None
            }
        }
    }

    /// Current account list, or `None` if the request failed
    pub async fn fetch_accounts(&self) -> Option<AccountStatusSnapshot> {
        match self.source.fetch_status().await {
            Ok(response) => Some(response.into_snapshot()),
            Err(e) => {
                log_failure("Account status fetch", &e);
                None
            }
        }
    }

    /// Run one status check and report it for `generation`
    pub fn spawn_status_check(
        &self,
        generation: u64,
        msg_tx: mpsc::Sender<Message>,
    ) -> JoinHandle<()> {
        let poller = self.clone();
        tokio::spawn(async move {
            let initialized = poller.fetch_status().await;
            let _ = msg_tx
                .send(Message::StatusChecked {
                    generation,
                    initialized,
                })
                .await;
        })
    }

    /// Fetch the account list once
    pub fn spawn_accounts_fetch(
        &self,
        generation: u64,
        msg_tx: mpsc::Sender<Message>,
    ) -> JoinHandle<()> {
        let poller = self.clone();
        tokio::spawn(async move {
            if let Some(snapshot) = poller.fetch_accounts().await {
                let _ = msg_tx
                    .send(Message::AccountsFetched {
                        generation,
                        snapshot,
                    })
                    .await;
            }
        })
    }

    /// Fetch immediately, then every `period` until aborted or the receiver
    /// goes away
    pub fn spawn_polling(
        &self,
        generation: u64,
        period: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) -> JoinHandle<()> {
        let poller = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let Some(snapshot) = poller.fetch_accounts().await else {
                    continue;
                };
                let sent = msg_tx
                    .send(Message::AccountsFetched {
                        generation,
                        snapshot,
                    })
                    .await;
                if sent.is_err() {
                    debug!("Account polling stopped: receiver closed");
                    break;
                }
            }
        })
    }
}

/// Poll failures never reach the operator; only the log level differs
fn log_failure(what: &str, err: &Error) {
    if err.is_recoverable() {
        warn!("{} failed: {}", what, err);
    } else {
        error!("{} failed: {}", what, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igpanel_client::test_utils::{status_response, MockStatusSource};
    use igpanel_core::StatusResponse;

    fn poller(source: &MockStatusSource) -> StatusPoller<MockStatusSource> {
        StatusPoller::new(Arc::new(source.clone()))
    }

    #[tokio::test]
    async fn test_fetch_status_reads_flag() {
        let source = MockStatusSource::always(status_response(true, &[]));
        assert_eq!(poller(&source).fetch_status().await, Some(true));
    }

    #[tokio::test]
    async fn test_fetch_status_failure_is_none() {
        let source = MockStatusSource::failing();
        assert_eq!(poller(&source).fetch_status().await, None);
    }

    #[tokio::test]
    async fn test_no_manager_response_has_no_flag() {
        let source = MockStatusSource::always(StatusResponse {
            success: false,
            initialized: None,
            message: Some("Менеджер аккаунтов не инициализирован".into()),
            accounts: Vec::new(),
        });
        let poller = poller(&source);
        assert_eq!(poller.fetch_status().await, None);

        let snapshot = poller.fetch_accounts().await.unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.message.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_fetches_immediately_then_periodically() {
        let source = MockStatusSource::always(status_response(true, &[("alice", true)]));
        let (tx, mut rx) = mpsc::channel(16);
        let task = poller(&source).spawn_polling(3, Duration::from_secs(30), tx);

        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first,
            Message::AccountsFetched { generation: 3, .. }
        ));
        assert_eq!(source.calls(), 1);

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(source.calls(), 1);

        let second = rx.recv().await.unwrap();
        assert!(matches!(second, Message::AccountsFetched { .. }));
        assert_eq!(source.calls(), 2);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_skips_failures_and_keeps_going() {
        let source = MockStatusSource::sequence(vec![
            None,
            Some(status_response(true, &[("bob", false)])),
        ]);
        let (tx, mut rx) = mpsc::channel(16);
        let task = poller(&source).spawn_polling(1, Duration::from_secs(30), tx);

        let msg = rx.recv().await.unwrap();
        let Message::AccountsFetched { snapshot, .. } = msg else {
            panic!("expected accounts, got {msg:?}");
        };
        assert_eq!(snapshot.accounts[0].username, "bob");
        assert_eq!(source.calls(), 2);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_stops_when_receiver_dropped() {
        let source = MockStatusSource::always(status_response(true, &[]));
        let (tx, rx) = mpsc::channel(16);
        let task = poller(&source).spawn_polling(1, Duration::from_secs(1), tx);
        drop(rx);

        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("polling task should end")
            .unwrap();
    }

    #[tokio::test]
    async fn test_status_check_reports_generation() {
        let source = MockStatusSource::always(status_response(false, &[]));
        let (tx, mut rx) = mpsc::channel(4);
        poller(&source).spawn_status_check(7, tx);

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Message::StatusChecked {
                generation: 7,
                initialized: Some(false)
            }
        ));
    }
}
