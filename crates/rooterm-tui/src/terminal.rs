//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait using crossterm for keyboard events,
//! ratatui for rendering and tokio-tungstenite for the connection.
//!
//! Connect and read commands run on spawned tasks and post a [`Completion`]
//! back over a channel; [`TerminalDriver::poll_event`] selects over that
//! channel and the terminal event stream, so both reach the app through one
//! ordered queue. The read half of the connection is moved into the read task
//! and handed back with its result, which makes a second concurrent read
//! impossible.

use std::io::{self, Stdout, stdout};

use chrono::{DateTime, FixedOffset, Local};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use rooterm_app::{App, AppEvent, Driver, KeyInput};
use thiserror::Error;
use tokio::{sync::mpsc, task::AbortHandle};

use crate::{
    transport::{self, ConnectionReader, ConnectionWriter, ReadOutcome, TransportError},
    ui,
};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No open connection to write to.
    #[error("not connected")]
    NotConnected,
}

/// Result of a spawned connection command.
enum Completion {
    Connected { writer: ConnectionWriter, reader: ConnectionReader },
    ConnectFailed(String),
    Read { outcome: ReadOutcome, reader: ConnectionReader },
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal, the connection handle and the tasks running
/// outstanding commands.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    writer: Option<ConnectionWriter>,
    /// Idle read half. `None` while a read is outstanding or when closed.
    reader: Option<ConnectionReader>,
    connect_task: Option<AbortHandle>,
    read_task: Option<AbortHandle>,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_stream: EventStream::new(),
            completions_tx,
            completions_rx,
            writer: None,
            reader: None,
            connect_task: None,
            read_task: None,
        })
    }

    /// Turn a finished command into the event the app expects.
    fn complete(&mut self, completion: Completion) -> AppEvent {
        match completion {
            Completion::Connected { writer, reader } => {
                self.connect_task = None;
                self.writer = Some(writer);
                self.reader = Some(reader);
                AppEvent::Connected
            },
            Completion::ConnectFailed(reason) => {
                self.connect_task = None;
                AppEvent::ConnectFailed { reason }
            },
            Completion::Read { outcome, reader } => {
                self.read_task = None;
                match outcome {
                    ReadOutcome::Frame(payload) => {
                        if self.writer.is_some() {
                            self.reader = Some(reader);
                        }
                        AppEvent::FrameReceived { payload }
                    },
                    ReadOutcome::Closed => AppEvent::ConnectionClosed,
                    ReadOutcome::Failed(e) => AppEvent::ReadFailed { reason: e.to_string() },
                }
            },
        }
    }
}

/// Convert a crossterm key event to `KeyInput`.
///
/// Control combinations with a character map to [`KeyInput::Ctrl`] so the
/// terminate keys are recognised regardless of the active widget.
pub fn convert_key(event: KeyEvent) -> Option<KeyInput> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char(c) => Some(KeyInput::Ctrl(c.to_ascii_lowercase())),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                            if let Some(key) = convert_key(key_event) {
                                return Ok(Some(AppEvent::Key(key)));
                            }
                        },
                        Some(Ok(Event::Resize(cols, rows))) => {
                            return Ok(Some(AppEvent::Resize(cols, rows)));
                        },
                        Some(Ok(_)) => {},
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                // Command completions
                Some(completion) = self.completions_rx.recv() => {
                    return Ok(Some(self.complete(completion)));
                }
            }
        }
    }

    fn connect(&mut self, endpoint: &str) {
        let tx = self.completions_tx.clone();
        let endpoint = endpoint.to_owned();

        let handle = tokio::spawn(async move {
            let completion = match transport::connect(&endpoint).await {
                Ok((writer, reader)) => Completion::Connected { writer, reader },
                Err(e) => Completion::ConnectFailed(e.to_string()),
            };
            let _ = tx.send(completion);
        });
        self.connect_task = Some(handle.abort_handle());
    }

    fn read_next(&mut self) {
        let Some(mut reader) = self.reader.take() else {
            tracing::warn!("read requested without an idle connection");
            return;
        };
        let tx = self.completions_tx.clone();

        let handle = tokio::spawn(async move {
            let outcome = reader.read_frame().await;
            let _ = tx.send(Completion::Read { outcome, reader });
        });
        self.read_task = Some(handle.abort_handle());
    }

    async fn send(&mut self, payload: String) -> Result<(), Self::Error> {
        let writer = self.writer.as_mut().ok_or(TerminalError::NotConnected)?;
        writer.write_frame(payload).await?;
        Ok(())
    }

    fn close(&mut self) {
        if let Some(task) = self.read_task.take() {
            task.abort();
        }
        self.reader = None;
        if let Some(writer) = self.writer.take() {
            tokio::spawn(writer.close());
        }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.connect_task.take() {
            task.abort();
        }
        self.close();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
