// Campus Events - terminal client for college department events
//
// A client-side application: every entity comes from an injected in-memory
// data source and every "submit" is a stubbed operation that resolves
// locally after a configured latency.
//
// Architecture:
// - Data source (trait + in-memory adapter): supplies events, registrations,
//   departments, and the profile user; admin mutations apply in memory
// - Collection view model: the search/facet/paginate derivation every
//   listing view shares
// - Stub backend: simulated submissions with typed outcomes, abortable when
//   the user navigates away
// - TUI (ratatui): routes as views, per-page controllers, tokio event loop

mod backend;
mod cli;
mod collection;
mod config;
mod data;
mod logging;
mod models;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use data::InMemoryDataSource;
use logging::{LogBuffer, PanelLogLayer};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --reset, --edit, --path)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure the config template exists so users can discover options
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs go to an in-memory buffer (the TUI owns the screen); optionally
    // also to rotating JSON files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("campus_events={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's lifetime so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(PanelLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(PanelLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(PanelLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // The data source is injected, never ambient: the TUI only ever sees
    // the trait. Swapping in a fetch-based adapter later means changing
    // this one line.
    let data: Arc<dyn data::DataSource> = Arc::new(InMemoryDataSource::seeded());

    tracing::info!(
        theme = %config.theme,
        latency_ms = config.submit_latency_ms,
        "starting campus-events"
    );

    tui::run_tui(config, data, log_buffer).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
