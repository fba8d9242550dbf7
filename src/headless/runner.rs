//! Headless mode runner - main event loop without TUI

use std::io::Write;
use std::time::Duration;

use igpanel_app::config::Settings;
use igpanel_app::{Engine, EngineEvent, Message};
use igpanel_client::{ActionTransport, LogTransport, StatusSource};
use igpanel_core::prelude::*;
use igpanel_core::Page;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;

use super::{parse_command, HeadlessEvent};

/// Drives toast expiry and the init page timers
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings, page: Page) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("igpanel starting in HEADLESS mode");
    info!("Server: {}", settings.server.base_url);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings)?;
    let mut events = engine.subscribe();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        stdin_reader_blocking(stdin_tx);
    });

    engine.start(page);

    let mut stdout = std::io::stdout();
    let result = headless_event_loop(&mut engine, &mut events, &mut stdout).await;

    engine.shutdown().await;
    write_events(&mut events, &mut stdout);

    info!("igpanel headless mode exiting");
    result
}

/// Main headless event loop
///
/// Runs until a quit is requested or the message channel closes, writing
/// the engine's events after every processed message.
pub async fn headless_event_loop<S, A, T, W>(
    engine: &mut Engine<S, A, T>,
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()>
where
    S: StatusSource + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    T: LogTransport + Send + Sync + 'static,
    W: Write,
{
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    write_events(events, out);

    while !engine.should_quit() {
        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => engine.process_message(msg),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            _ = ticker.tick() => engine.process_message(Message::Tick),
        }

        write_events(events, out);
    }

    if engine.should_quit() {
        info!("Quit requested");
    }
    Ok(())
}

/// Write every queued engine event as NDJSON
pub fn write_events<W: Write>(events: &mut broadcast::Receiver<EngineEvent>, out: &mut W) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                for headless in HeadlessEvent::from_engine_event(&event) {
                    if let Err(e) = headless.write_to(out) {
                        error!("Failed to write headless event: {}", e);
                    }
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read commands from stdin until EOF or `quit` (blocking, own thread)
fn stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(msg)) => {
                let quit = matches!(msg, Message::Quit);
                debug!("Stdin command: {}", line.trim());
                if msg_tx.blocking_send(msg).is_err() || quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }
    }

    info!("Stdin reader exiting");
}
