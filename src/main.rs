mod api;
mod app;
mod card;
mod config;
mod dropdown;
mod error;
mod input;
mod location;
mod logging;
mod messages;
mod modal;
mod model;
mod search;
mod status;
mod storage;
mod sync;
mod theme;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use app::App;
use clap::Parser;
use config::{AppPaths, ClientConfig};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::layout::Rect;
use tracing::{error, info};

/// TUI client for the RecoFilm movie tracker
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// User whose statuses are edited (overrides the config file)
    #[arg(short, long)]
    user_id: Option<i64>,

    /// Initial address, e.g. "/?name=Matrix&limit=20" or "/recommendations"
    #[arg(long, default_value = "/")]
    url: String,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let paths = AppPaths::discover()?;

    let mut config = ClientConfig::load(cli.config.as_deref().unwrap_or(&paths.config_file))?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(user_id) = cli.user_id {
        config.user_id = user_id;
    }
    config.validate()?;

    let log_file = cli.log_file.unwrap_or(paths.log_file);
    let _log_guard = logging::init_logging(&log_file, &config.log_level)?;
    info!(base_url = %config.base_url, user_id = config.user_id, "starting");

    let backend = api::HttpBackend::new(&config.base_url, config.request_timeout())?;
    let store = storage::KeyValueStore::new(paths.storage_file);
    let location = location::Location::parse(&cli.url)?;

    let mut app = App::new(config, Arc::new(backend), store, location);
    app.refresh();

    // Init terminal
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(e) = result {
        error!(error = %e, "terminal loop failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    info!("exiting");
    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.drain_messages();
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 100ms timeout so fetch results show up promptly
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }
    }
}
