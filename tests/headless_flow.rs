//! End-to-end flows through the headless runner
//!
//! The engine runs against scripted backend doubles and the NDJSON output is
//! captured in memory.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use igpanel::headless::runner::{headless_event_loop, write_events};
use igpanel_app::config::Settings;
use igpanel_app::{ActionKind, Engine, Message, READY_PHRASE};
use igpanel_client::test_utils::{
    status_response, MockActionTransport, MockStatusSource, ScriptedConnection,
    ScriptedTransport,
};
use igpanel_core::{ActionOutcome, Page, SystemClock};
use serde_json::Value;

type TestEngine = Engine<MockStatusSource, MockActionTransport, ScriptedTransport>;

/// Writer shared between the event loop and the test driver
#[derive(Clone, Default)]
struct SharedOutput(Arc<Mutex<Vec<u8>>>);

impl SharedOutput {
    fn events(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn has(&self, predicate: impl Fn(&Value) -> bool) -> bool {
        self.events().iter().any(predicate)
    }

    async fn wait_for(&self, what: &str, predicate: impl Fn(&Value) -> bool) {
        let found = tokio::time::timeout(Duration::from_secs(10), async {
            while !self.has(&predicate) {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await;
        assert!(found.is_ok(), "timed out waiting for {what}: {:?}", self.events());
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fast_settings() -> Settings {
    let mut settings = Settings::default();
    settings.init.prompt_delay_ms = 0;
    settings.init.redirect_delay_ms = 0;
    settings
}

fn engine(
    status: MockStatusSource,
    actions: MockActionTransport,
    transport: ScriptedTransport,
) -> TestEngine {
    Engine::with_services(
        fast_settings(),
        Arc::new(SystemClock),
        Arc::new(status),
        Arc::new(actions),
        transport,
    )
}

fn log_payload(line: &str) -> String {
    serde_json::json!({ "log": line }).to_string()
}

fn is_page(event: &Value, page: &str) -> bool {
    event["event"] == "page_loaded" && event["page"] == page
}

/// Run the loop until `driver` finishes and sends quit, then shut down
async fn run_with<F>(mut engine: TestEngine, page: Page, output: &SharedOutput, driver: F)
where
    F: std::future::Future<Output = ()>,
{
    let mut events = engine.subscribe();
    let quit_tx = engine.msg_sender();
    engine.start(page);

    let mut out = output.clone();
    let driver = async {
        driver.await;
        quit_tx.send(Message::Quit).await.unwrap();
    };
    let (result, ()) = tokio::join!(
        headless_event_loop(&mut engine, &mut events, &mut out),
        driver
    );
    result.unwrap();

    engine.shutdown().await;
    write_events(&mut events, &mut out);
}

#[tokio::test]
async fn test_ready_line_leads_to_dashboard() {
    let info = log_payload("[INFO] starting");
    let ready = log_payload(&format!("[SUCCESS] {READY_PHRASE}"));
    let transport = ScriptedTransport::new(vec![ScriptedConnection::payloads_then_hold(&[
        &info, &ready,
    ])]);
    let engine = engine(
        MockStatusSource::failing(),
        MockActionTransport::default(),
        transport,
    );

    let output = SharedOutput::default();
    let waiter = output.clone();
    run_with(engine, Page::Init, &output, async move {
        waiter
            .wait_for("dashboard", |e| is_page(e, "dashboard"))
            .await;
    })
    .await;

    let events = output.events();
    let logs: Vec<&Value> = events.iter().filter(|e| e["event"] == "log").collect();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["severity"], "info");
    assert_eq!(logs[1]["severity"], "success");

    let init_states: Vec<&Value> = events
        .iter()
        .filter(|e| e["event"] == "init_state")
        .collect();
    assert_eq!(init_states.len(), 1);
    assert_eq!(init_states[0]["state"], "succeeded");

    assert_eq!(events.iter().filter(|e| is_page(e, "dashboard")).count(), 1);
    assert!(events.iter().any(|e| e["event"] == "prompt" && e["kind"] == "success"));
    assert_eq!(events.last().unwrap()["event"], "shutdown");
}

#[tokio::test]
async fn test_uninitialized_backend_redirects_dashboard_to_init() {
    let engine = engine(
        MockStatusSource::always(status_response(false, &[])),
        MockActionTransport::default(),
        ScriptedTransport::new(vec![]),
    );

    let output = SharedOutput::default();
    let waiter = output.clone();
    run_with(engine, Page::Dashboard, &output, async move {
        waiter.wait_for("init page", |e| is_page(e, "init")).await;
    })
    .await;

    let pages: Vec<String> = output
        .events()
        .iter()
        .filter(|e| e["event"] == "page_loaded")
        .map(|e| e["route"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(pages, vec!["/dashboard", "/"]);
}

#[tokio::test]
async fn test_empty_follow_warns_without_request() {
    let actions = MockActionTransport::responding(ActionOutcome::success("Followed"));
    let engine = engine(
        MockStatusSource::failing(),
        actions.clone(),
        ScriptedTransport::new(vec![]),
    );
    let tx = engine.msg_sender();

    let output = SharedOutput::default();
    let waiter = output.clone();
    run_with(engine, Page::Dashboard, &output, async move {
        tx.send(Message::SubmitWith {
            kind: ActionKind::Follow,
            username: "   ".into(),
            url: String::new(),
            comment: String::new(),
        })
        .await
        .unwrap();
        waiter
            .wait_for("warning", |e| {
                e["event"] == "notification" && e["kind"] == "warning"
            })
            .await;
    })
    .await;

    let notifications = output
        .events()
        .into_iter()
        .filter(|e| e["event"] == "notification")
        .count();
    assert_eq!(notifications, 1);
    assert!(actions.requests().is_empty());
}

#[tokio::test]
async fn test_follow_request_reports_backend_message() {
    let actions = MockActionTransport::responding(ActionOutcome::success("Followed alice"));
    let engine = engine(
        MockStatusSource::failing(),
        actions.clone(),
        ScriptedTransport::new(vec![]),
    );
    let tx = engine.msg_sender();

    let output = SharedOutput::default();
    let waiter = output.clone();
    run_with(engine, Page::Dashboard, &output, async move {
        tx.send(Message::SubmitWith {
            kind: ActionKind::Follow,
            username: " alice ".into(),
            url: String::new(),
            comment: String::new(),
        })
        .await
        .unwrap();
        waiter
            .wait_for("success", |e| {
                e["event"] == "notification" && e["message"] == "Followed alice"
            })
            .await;
    })
    .await;

    let requests = actions.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1["username"], "alice");
}
