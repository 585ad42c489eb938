use atharva::app::{App, AppMessage};
use atharva::config::Config;
use atharva::terminal::{setup_panic_hook, TerminalManager};
use atharva::traits::HttpClient;
use atharva::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set up file-backed tracing.
///
/// The TUI owns stdout, so diagnostics go to a log file under the user's
/// data directory. Filter via `ATHARVA_LOG` (default `info`). Failure to
/// create the file just means no logs.
fn init_tracing() {
    use std::sync::Mutex;
    use tracing_subscriber::EnvFilter;

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("atharva");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("atharva.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_env("ATHARVA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args()
        .skip(1)
        .any(|arg| arg == "--version" || arg == "-V")
    {
        println!("atharva {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();

    let config = Config::from_env();
    tracing::info!(base_url = %config.base_url, version = VERSION, "starting atharva");

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let mut app = App::new(config)?;
    app.load_initial_data();

    let result = run_app(term_manager.terminal(), &mut app).await;

    // Restore the terminal before reporting any error
    drop(term_manager);
    result
}

/// Await the next async completion, or park forever if the receiver was
/// already taken.
async fn recv_message(
    rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    C: HttpClient + 'static,
{
    // Async stream of keyboard/resize events
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &*app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // 16ms tick keeps the busy spinner animating while a request is
        // in flight
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => app.mark_dirty(),
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        _ => {}
                    }
                }
            }

            message = recv_message(&mut message_rx) => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }
    }
}
