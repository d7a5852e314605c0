//! `slideview` - terminal slide deck viewer.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{panic, time::Duration, time::Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use slideview::app::App;
use slideview::config::Config;
use slideview::constants::timing::POLL_MS;
use slideview::deck::Deck;
use slideview::error::{Error, Result};
use slideview::ui;

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Send tracing output to the configured log file; the alternate screen
/// owns stdout.
fn init_tracing(config: &Config) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs_err::create_dir_all(dir) {
            eprintln!("Logging disabled: {e}");
            return;
        }
    }
    let file = match fs_err::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            return;
        }
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    info!("{} {} starting", config.app_name(), config.app_version());
}

fn resolve_deck_path(config: &Config) -> Result<PathBuf> {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.deck_path.clone())
        .ok_or_else(|| Error::config("no deck file given", "Pass a deck path or set SLIDEVIEW_DECK"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    let deck_path = resolve_deck_path(&config)?;
    let deck = Deck::load(&deck_path)?;
    let deck_dir = deck_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    let app = App::new(config, &deck, &deck_dir, Instant::now())?;

    // Setup better panic handling that cleans up terminal first
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    if let Err(e) = cleanup_terminal(&mut terminal) {
        eprintln!("Error cleaning up terminal: {e:?}");
    }

    if let Err(err) = res {
        error!("{err}");
        eprintln!("{err:?}");
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, &mut app))?;

        if app.take_bell() {
            if let Err(e) = io::stdout().write_all(b"\x07").and_then(|()| io::stdout().flush()) {
                warn!("Failed to ring bell: {e}");
            }
        }

        if event::poll(Duration::from_millis(POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        } else {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
