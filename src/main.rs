// Student Roster - terminal front end for a Student Directory service
//
// Lists, adds, edits and deletes student records held by a REST service,
// validating drafts on the client before anything is sent.
//
// Architecture:
// - Roster core: pure state transitions plus the HTTP directory client
// - TUI (ratatui): table, inline edit row, creation form, modals
// - CLI (clap): the same operations as one-shot subcommands
// - Demo (axum): an in-memory directory service for trying things out

mod cli;
mod config;
mod demo;
mod logging;
mod roster;
mod startup;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use roster::{HttpDirectory, Roster};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Config management runs before anything is loaded or logged
    let cli = Cli::parse();
    let command = match cli.command {
        Some(Commands::Config(args)) => {
            cli::handle_config(args);
            return Ok(());
        }
        other => other,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let mut config = Config::from_env();

    let use_tui = config.enable_tui && command.is_none();
    let log_buffer = LogBuffer::new();

    // The guard must live until exit so file logs flush
    let _file_guard = init_tracing(&config, use_tui, &log_buffer);

    if let Some(Commands::ServeDemo { bind }) = command {
        return demo::serve(bind.unwrap_or(config.demo.bind_addr), config.demo.seed).await;
    }

    // Demo mode: run the in-memory directory in-process and point the client at it
    let demo_server = if config.demo_mode {
        let students = if config.demo.seed {
            demo::seed()
        } else {
            Vec::new()
        };
        let server = demo::spawn(config.demo.bind_addr, students).await?;
        config.service_url = server.base_url();
        Some(server)
    } else {
        None
    };

    let result = match command {
        Some(command) => cli::run_command(command, &config).await,
        None => run_interactive(&config, log_buffer, use_tui).await,
    };

    if let Some(server) = demo_server {
        server.shutdown().await;
    }

    result
}

/// Default mode: the TUI, or a one-shot roster print when it is disabled
async fn run_interactive(config: &Config, log_buffer: LogBuffer, use_tui: bool) -> Result<()> {
    startup::print_startup(config);

    let directory = HttpDirectory::new(&config.service_url, config.request_timeout())
        .context("Failed to build HTTP client")?;

    if use_tui {
        startup::log_startup(config);
        tui::run_tui(config.clone(), log_buffer, directory).await
    } else {
        let mut roster = Roster::new(directory);
        roster.load_all().await;
        cli::print_roster(roster.students());
        Ok(())
    }
}

/// Initialize tracing with conditional output
///
/// - TUI mode: capture into the log buffer (writing to the terminal would
///   garble the display)
/// - Otherwise: human-readable logs on stderr
/// - File logging: optional JSON files with rotation, in addition to the above
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, use_tui: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    let tui_layer = use_tui.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = (!use_tui).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled and the
/// directory is usable
fn file_writer(config: &Config) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let logging = &config.logging;
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix),
    };

    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(appender))
}
