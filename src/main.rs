use sidediff::app::{App, AppMessage};
use sidediff::cli::{parse_args, run_cli_command, RunOptions};
use sidediff::config::Config;
use sidediff::logging::init_logging;
use sidediff::state::Slot;
use sidediff::terminal::{setup_panic_hook, TerminalManager};
use sidediff::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

/// Idle wake-up interval of the event loop.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags that print and exit are handled before any terminal setup
    let options = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;
    let log_path = init_logging();
    setup_panic_hook();

    tracing::info!(
        version = sidediff::cli::VERSION,
        log = ?log_path,
        "Starting sidediff"
    );

    let config = Config::load_or_default(options.config.as_deref());
    let runtime = tokio::runtime::Runtime::new()?;

    let result = runtime.block_on(run(config, &options));

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:?}", e);
    } else {
        tracing::info!("Exited");
    }
    result
}

async fn run(config: Config, options: &RunOptions) -> Result<()> {
    let mut app = App::new(config);
    preload_files(&mut app, options);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
    result
}

/// Start loading the files given on the command line.
fn preload_files(app: &mut App, options: &RunOptions) {
    for (slot, path) in [(Slot::A, &options.file_a), (Slot::B, &options.file_b)] {
        if let Some(path) = path {
            app.request_file_load(slot, path.clone());
        }
    }
}

/// Draw and handle events until the app quits.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(text),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
