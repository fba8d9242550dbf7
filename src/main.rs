//! igpanel - terminal control panel for an account automation backend
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use igpanel_app::config::{default_config_path, init_config_file, load_settings};
use igpanel_core::Page;

/// igpanel - live log stream and controls for the automation backend
#[derive(Parser, Debug)]
#[command(name = "igpanel", version)]
#[command(about = "Terminal control panel for an account automation backend", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file (default: <config dir>/igpanel/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Page to open first: `init` (/) or `dashboard` (/dashboard)
    #[arg(long, default_value = "init", value_parser = parse_page)]
    page: Page,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

fn parse_page(value: &str) -> std::result::Result<Page, String> {
    Page::from_route(value).ok_or_else(|| format!("unknown page '{value}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            eprintln!("Wrote {}", config_path.display());
        } else {
            eprintln!("{} already exists", config_path.display());
        }
        return Ok(());
    }

    igpanel_core::logging::init()?;

    let mut settings = load_settings(&config_path);
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }

    if args.headless {
        igpanel::run_headless(settings, args.page).await?;
    } else {
        igpanel::run_tui(settings, args.page).await?;
    }
    Ok(())
}
