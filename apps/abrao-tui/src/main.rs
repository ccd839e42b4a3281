//! Abrao TUI - researcher profile browser
//!
//! Terminal front end for the abrao backend: search researchers, browse
//! their profile, publications and metrics, export their record.

mod app;
mod cli;
mod dispatch;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::EnvFilter;

use abrao_core::api::HttpProfileApi;
use abrao_core::state::Response;

use app::App;
use cli::Args;
use dispatch::Dispatcher;

/// Log filter variable, e.g. `ABRAO_LOG=abrao_core=debug`
const LOG_ENV: &str = "ABRAO_LOG";

/// Logs go to a file so they never draw over the terminal UI.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("abrao")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("abrao.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let config = args.load_config()?;
    let route = args.start_route()?;
    tracing::info!(base_url = %config.api.base_url, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let api = HttpProfileApi::new(&config.api)?;
    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(Arc::new(api), runtime.handle().clone(), tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, route);
    let res = run_app(&mut terminal, &mut app, &dispatcher, rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal error: {}", err);
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut responses: UnboundedReceiver<Response>,
) -> io::Result<()> {
    loop {
        for request in app.take_requests() {
            dispatcher.dispatch(request);
        }

        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }

        while let Ok(response) = responses.try_recv() {
            app.on_response(response);
        }
    }
}
