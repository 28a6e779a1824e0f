//! Terminal chat client for rooterm
//!
//! A thin shell over [`rooterm_app::Driver`] that provides terminal and
//! WebSocket I/O. All orchestration logic lives in the generic
//! [`rooterm_app::Runtime`].
//!
//! This crate handles terminal rendering, the connection and the command line.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod terminal;
pub mod transport;
pub mod ui;

pub use config::{Args, Config};
pub use rooterm_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
