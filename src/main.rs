//! Server statistics monitor.
//!
//! Polls a statistics endpoint that returns one comma-delimited line and
//! prints a warning for every threshold the sample exceeds.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                        STATS MONITOR                         │
//!   │                                                              │
//!   │  ┌──────────┐   ┌───────────┐   ┌───────────┐   ┌─────────┐  │
//!   │  │  fetch   │──▶│  monitor  │──▶│ evaluator │──▶│ stdout  │  │
//!   │  │ (reqwest)│   │  runner   │   │ (pure fn) │   │  sink   │  │
//!   │  └──────────┘   └─────┬─────┘   └───────────┘   └─────────┘  │
//!   │       ▲               │                                      │
//!   │       │               ▼                                      │
//!   │       │         ┌───────────┐                                │
//!   │       └─────────│   timer   │◀──── lifecycle (Ctrl-C)        │
//!   │                 └───────────┘                                │
//!   │                                                              │
//!   │   config (built-in or TOML)      observability (stderr)      │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use stats_monitor::fetch::HttpFetcher;
use stats_monitor::lifecycle::{signals, startup, Shutdown};
use stats_monitor::monitor::{Monitor, MonitorExit, StdoutSink, TokioSleeper};
use stats_monitor::observability::logging;

#[derive(Parser)]
#[command(name = "stats-monitor")]
#[command(about = "Poll a server statistics endpoint and warn on threshold breaches", long_about = None)]
struct Cli {
    /// Optional TOML file overriding the built-in settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_logging();

    tracing::info!("stats-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    let config = startup::resolve_config(cli.config.as_deref())?;
    let fetcher = HttpFetcher::new()?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let mut monitor = Monitor::new(config, fetcher, TokioSleeper, StdoutSink);
    match monitor.run(shutdown.subscribe()).await {
        MonitorExit::FetchBudgetExhausted => {
            tracing::info!("Stopped after repeated fetch failures");
        }
        MonitorExit::Shutdown => {
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
