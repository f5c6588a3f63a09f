use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use nudge::adapters::ReqwestHttpClient;
use nudge::api::ApiClient;
use nudge::app::{App, AppMessage};
use nudge::config::Config;
use nudge::{logging, terminal, ui};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toast expiry and redraw cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("nudge {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = Config::load();
    logging::init(&config)?;
    tracing::info!(base_url = %config.base_url, "starting");

    let http = Arc::new(ReqwestHttpClient::new());
    let api = Arc::new(ApiClient::new(&config.base_url, http));
    let (mut app, rx) = App::new(api);

    terminal::setup_panic_hook();
    let mut term = terminal::setup()?;

    app.check_health();

    let result = run_app(&mut term, &mut app, rx).await;

    terminal::restore();
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App,
    mut rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.expire_toast();
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        // Ctrl+C always quits, regardless of what is open
                        if key.kind == KeyEventKind::Press
                            && key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            return Ok(());
                        }
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(%err, "terminal event error");
                        return Err(err.into());
                    }
                    None => return Ok(()),
                }
            }
            message = rx.recv() => {
                match message {
                    Some(message) => app.handle_message(message),
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
