//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default host of the chat endpoint.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the chat endpoint.
pub const DEFAULT_PORT: u16 = 9421;

/// Terminal client for a WebSocket chat endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "rooterm")]
#[command(about = "Terminal client for a WebSocket chat endpoint")]
#[command(version)]
pub struct Args {
    /// Host of the chat endpoint
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port of the chat endpoint
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// WebSocket URL to dial.
    pub endpoint: String,
    /// Log destination, if logging is enabled.
    pub log_file: Option<PathBuf>,
    /// Default tracing filter directive.
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            endpoint: endpoint_url(&args.host, args.port),
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}

/// Endpoint URL for a host and port.
pub fn endpoint_url(host: &str, port: u16) -> String {
    format!("ws://{host}:{port}/")
}
