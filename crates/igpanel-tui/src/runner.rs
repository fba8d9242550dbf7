//! Main TUI runner - entry point and event loop

use igpanel_app::config::Settings;
use igpanel_app::Engine;
use igpanel_core::prelude::*;
use igpanel_core::Page;

use crate::{event, render, terminal};

/// Run the TUI against the configured backend, starting on `page`
pub async fn run(settings: Settings, page: Page) -> Result<()> {
    terminal::install_panic_hook();

    info!(server = %settings.server.base_url, %page, "Starting igpanel TUI");
    let mut engine = Engine::new(settings)?;

    let mut term = ratatui::init();
    engine.start(page);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {e}");
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Stream lines, status results, action outcomes, signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        for message in event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
