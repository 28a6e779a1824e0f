//! Application layer for rooterm
//!
//! Pure session state machine and generic runtime for the chat client. The
//! same orchestration code runs against the real terminal and against
//! scripted drivers in tests.
//!
//! # Components
//!
//! - [`App`]: session state machine (connection lifecycle, log, input modes)
//! - [`InputMode`]: free-text editor or suggestion list
//! - [`Driver`]: trait for terminal and connection I/O
//! - [`Runtime`]: event loop dispatching [`AppAction`]s through a Driver
//! - [`wrap_text`]: log word wrapping

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod mode;
mod runtime;
mod state;
mod wrap;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use mode::{InputMode, SuggestionList, TextInput};
pub use runtime::Runtime;
pub use state::{ConnectionState, EntryKind, LogEntry};
pub use wrap::{LOG_WRAP_WIDTH, wrap_text};
