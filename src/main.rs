use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use omnitool::app::{App, AppMessage};
use omnitool::cli::{parse_args, run_cli_command, CliCommand};
use omnitool::input::CommandRegistry;
use omnitool::startup::{init_logging, AppConfig, LogTarget};
use omnitool::terminal::{setup_panic_hook, TerminalManager};
use omnitool::ui;

/// Tick interval for spinner animation.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Held until exit so buffered lines reach the log file
    let log_guard = init_logging(&LogTarget::from_env())?;

    // CLI commands run without touching the terminal
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            drop(log_guard);
            std::process::exit(1);
        }
        return Ok(());
    }

    color_eyre::install()?;
    let config = AppConfig::from_env()?;

    setup_panic_hook();

    let files = match command {
        CliCommand::RunTui { files } => files,
        _ => Vec::new(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config, files))
}

/// Set up the terminal, preload `files` and run until the user quits.
async fn run_tui(config: AppConfig, files: Vec<PathBuf>) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(config);
    for path in &files {
        app.open_file(path);
    }

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    tracing::info!(model = %app.config.model, ai = app.ai_enabled(), "TUI started");

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => tracing::warn!("terminal event error: {}", e),
                    None => app.quit(),
                }
            }

            _ = timeout => {
                app.tick();
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("TUI exiting");
            return Ok(());
        }
    }
}
