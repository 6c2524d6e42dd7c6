// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, request completions)
// - Running queued roster requests on background tasks

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::roster::{effects, Completion, HttpDirectory};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, directory: HttpDirectory) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config);

    let result = run_event_loop(&mut terminal, &mut app, Arc::new(directory)).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Completions of requests spawned from the app's outbox
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    directory: Arc<HttpDirectory>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let (done_tx, mut done_rx) = mpsc::channel::<Completion>(64);

    app.request_reload();

    loop {
        // Start anything queued by the last input or completion
        for ticket in app.take_outbox() {
            let directory = Arc::clone(&directory);
            let done_tx = done_tx.clone();
            tokio::spawn(async move {
                let completion = effects::execute(directory.as_ref(), ticket).await;
                // Receiver gone means the UI is shutting down
                let _ = done_tx.send(completion).await;
            });
        }

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        app.handle_key(key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(completion) = done_rx.recv() => {
                tracing::debug!(seq = completion.seq, "Applying completion");
                app.on_completion(completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
