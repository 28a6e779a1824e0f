//! rooterm entry point.
//!
//! # Usage
//!
//! ```bash
//! # Connect to ws://127.0.0.1:9421/
//! rooterm
//!
//! # Connect elsewhere and keep a log
//! rooterm --host 10.0.0.5 --port 8080 --log-file rooterm.log
//! ```

use std::{fs::File, path::Path, sync::Mutex};

use clap::Parser;
use rooterm_tui::{Args, Config, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging(path: &Path, level: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from(Args::parse());

    if let Some(path) = &config.log_file {
        init_logging(path, &config.log_level)?;
    }

    tracing::info!("rooterm starting");
    tracing::info!("Endpoint {}", config.endpoint);

    let driver = TerminalDriver::new()?;
    let app = Runtime::new(driver, config.endpoint).run().await?;

    tracing::info!(state = app.connection_state().label(), "rooterm exiting");

    Ok(())
}
