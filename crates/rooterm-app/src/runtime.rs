//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: session state machine
//! - [`Driver`]: terminal and connection I/O
//!
//! All state mutation happens here, on one task, one event at a time. I/O
//! commands run inside the driver and come back as events through
//! [`Driver::poll_event`], so the state is never touched concurrently.

use rooterm_proto::encode_outgoing;

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime for the given endpoint.
    pub fn new(driver: D, endpoint: impl Into<String>) -> Self {
        Self { driver, app: App::new(endpoint) }
    }

    /// Run the main event loop.
    ///
    /// 1. Renders and issues the initial `Connect`
    /// 2. Waits for the next key or command completion
    /// 3. Feeds it to the App and dispatches the resulting actions
    ///
    /// Stops on `Quit` or when the driver runs out of input. The driver is
    /// stopped on exit so a blocked read cannot outlive the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        let result = self.event_loop().await;
        self.driver.stop();
        result.map(|()| self.app)
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        let actions = self.app.connect();
        if self.process_actions(actions).await? {
            return Ok(());
        }

        while let Some(event) = self.driver.poll_event().await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                break;
            }
        }

        tracing::info!("event loop stopped");
        Ok(())
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit. Events produced inline (send failures)
    /// are fed back iteratively rather than recursively.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                tracing::debug!("dispatching {:?}", action);
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Connect { endpoint } => self.driver.connect(&endpoint),
                    AppAction::ReadNext => self.driver.read_next(),
                    AppAction::Close => self.driver.close(),
                    AppAction::Send { message } => {
                        if let Some(event) = self.send(&message).await {
                            pending_actions.extend(self.app.handle(event));
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Encode and write a message. Returns the failure event, if any.
    async fn send(&mut self, message: &str) -> Option<AppEvent> {
        let payload = match encode_outgoing(message, self.driver.now()) {
            Ok(payload) => payload,
            Err(e) => return Some(AppEvent::EncodeFailed { reason: e.to_string() }),
        };

        match self.driver.send(payload).await {
            Ok(()) => None,
            Err(e) => Some(AppEvent::SendFailed { reason: e.to_string() }),
        }
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
