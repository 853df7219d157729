//! Library Catalog - interactive catalog manager

use std::io;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    cli::Menu,
    config::{AppConfig, LogFormat, LoggingConfig},
    repository::Repository,
    AppError, Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Must stay alive until exit so buffered log lines are flushed
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::new(&config.storage);
    let mut library = Library::open(repository)
        .map_err(log_fatal)
        .with_context(|| format!("Failed to open catalog {}", config.storage.path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run(&mut library)
        .map_err(log_fatal)
        .context("Catalog session aborted")?;

    tracing::info!("Session ended");
    Ok(())
}

/// Record a fatal error before it ends the process
fn log_fatal(e: AppError) -> AppError {
    tracing::error!("Fatal error (code {:?}): {:?}", e.code(), e);
    e
}

/// Install the global subscriber. Logs go to stderr or a daily file, never
/// to stdout where the menu is drawn.
fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", config.level).into());

    let (writer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "catalog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), None),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(config.directory.is_none());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
        LogFormat::Pretty => registry.with(fmt_layer).init(),
    }

    guard
}
