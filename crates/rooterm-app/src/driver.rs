//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. The terminal frontend implements it with crossterm and a
//! WebSocket connection; tests implement it with scripted events, while the
//! generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use chrono::{DateTime, FixedOffset};

use crate::{App, AppEvent};

/// Abstracts terminal and connection I/O for the application runtime.
///
/// Commands are started by the non-async methods (`connect`, `read_next`) and
/// complete asynchronously: their result is delivered later as an
/// [`AppEvent`] from [`poll_event`](Driver::poll_event), on the same queue as
/// keyboard input. The runtime therefore never blocks on a pending read.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, tokio-tungstenite for transport
/// - **Tests**: scripted event queues with recorded commands
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event or command completion.
    ///
    /// Returns `None` once the input source is exhausted and the loop should
    /// stop.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Start opening the connection. Completes with `Connected` or
    /// `ConnectFailed`.
    fn connect(&mut self, endpoint: &str);

    /// Start reading one frame. Completes with `FrameReceived`, `ReadFailed`
    /// or `ConnectionClosed`. Never called while a read is outstanding.
    fn read_next(&mut self);

    /// Write one encoded frame.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no connection or the write fails.
    fn send(&mut self, payload: String) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Drop the connection handle, unblocking any pending read.
    fn close(&mut self);

    /// Current wall-clock time, used to stamp outgoing messages.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop all outstanding work and clean up resources.
    fn stop(&mut self);
}
