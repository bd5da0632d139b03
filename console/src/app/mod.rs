//! # Application Orchestrator
//!
//! The [`App`] struct is the review session controller: it owns the session,
//! decides which screen is active, drives the review queue and scrape runs,
//! and turns backend outcomes into state the rendering surface can draw.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (single task)                                   │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App                                                  │   │
//! │  │  - navigate() / login() / rate() / skip() / ...       │   │
//! │  │  - handle_event() - applies task results in order     │   │
//! │  │  - frame() - view model for the rendering surface     │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                         │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │  Spawned tasks (tokio)                                      │
//! │  - one backend call each, one result AppEvent each          │
//! │  - gateway signals (401, transport failure) sent first      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Task sends its result
//! event_tx.send(AppEvent::PendingLoaded(batch)).await?;
//!
//! // Controller applies whatever is queued, without blocking
//! app.on_tick();
//!
//! // ...or waits until every spawned task has reported back
//! app.settle().await;
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`events`]: Event enum for async communication
//! - [`review`]: The review queue value object

pub mod events;
pub mod review;
pub mod state;

mod event_handler;
mod handlers;
mod tasks;

#[cfg(test)]
mod tests;

pub use event_handler::{CANNOT_CONNECT_MESSAGE, REVIEW_COMPLETE_MESSAGE, WELCOME_MESSAGE};
pub use events::AppEvent;
pub use review::ReviewQueue;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::QualityScore;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::ConsoleConfig;
use crate::core::error::Result;
use crate::core::service::{ApiService, CredentialStore};
use crate::services::{ApiClient, FileCredentialStore, Session};
use crate::ui::command::Command;
use crate::ui::views::Frame;
use event_handler::AppEventHandler;
use tasks::TaskContext;

/// Operator name shown for a session restored from the credential store
pub const RESTORED_OPERATOR: &str = "User";

/// Review session controller.
///
/// All mutation happens on the task that owns the `App`; spawned tasks only
/// report back through the event channel.
///
/// # Example
///
/// ```rust,no_run
/// use curator_console::app::{App, Screen};
/// use curator_console::config::ConsoleConfig;
///
/// # async fn run() -> curator_console::core::Result<()> {
/// let config = ConsoleConfig::from_env()?;
/// let mut app = App::new(&config)?;
/// app.start();
///
/// app.login("admin".to_string(), "admin123".to_string());
/// app.settle().await;
///
/// app.navigate(Screen::Rate);
/// app.settle().await;
/// app.skip()?;
/// # Ok(())
/// # }
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks briefly; never across an await.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for task results and gateway signals.
    event_rx: Receiver<AppEvent>,

    /// State, backend, channel and session handed to handlers and tasks.
    ctx: TaskContext,

    credentials: Arc<dyn CredentialStore>,

    probe_interval: Option<std::time::Duration>,

    monitor: Option<JoinHandle<()>>,
}

impl App {
    /// Build the controller against the real backend.
    ///
    /// A token persisted by an earlier run is restored; if the store cannot
    /// be read the console starts logged out with a warning.
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let (event_tx, event_rx) = unbounded();
        let credentials: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(&config.token_path));

        let (token, restore_warning) = match credentials.load() {
            Ok(token) => (token, None),
            Err(e) => {
                tracing::warn!(error = %e, path = %config.token_path.display(), "Failed to read persisted token");
                (None, Some(Notification::warning(format!("Could not read saved session: {}", e))))
            }
        };

        let session = Session::new(token);
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config, session.clone(), event_tx.clone())?);

        let app = Self::from_parts(api, credentials, session, event_tx, event_rx, config);
        if let Some(warning) = restore_warning {
            app.state.write().notify(warning);
        }
        Ok(app)
    }

    /// Assemble a controller from already-built collaborators.
    ///
    /// `event_tx` must be the sender the `api` reports gateway signals on.
    pub fn from_parts(
        api: Arc<dyn ApiService>,
        credentials: Arc<dyn CredentialStore>,
        session: Session,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        config: &ConsoleConfig,
    ) -> Self {
        let initial = if session.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Login
        };
        let mut initial_state = AppState::new(initial, config.deals_limit);
        if session.is_authenticated() {
            // The token carries no username
            initial_state.operator = Some(RESTORED_OPERATOR.to_string());
        }
        let state = Arc::new(RwLock::new(initial_state));

        tracing::info!(
            api_base = %config.api_base,
            initial_screen = initial.name(),
            restored_session = session.is_authenticated(),
            "Controller initialized"
        );

        Self {
            ctx: TaskContext {
                state: Arc::clone(&state),
                api,
                event_tx,
                session,
                pending_batch: config.pending_batch,
            },
            state,
            event_rx,
            credentials,
            probe_interval: config.probe_interval,
            monitor: None,
        }
    }

    /// Startup: probe the backend, start the periodic monitor if configured,
    /// and enter the initial screen.
    pub fn start(&mut self) {
        tasks::connectivity::probe(&self.ctx);

        if let Some(period) = self.probe_interval {
            tracing::info!(interval_secs = period.as_secs(), "Starting connectivity monitor");
            self.monitor = Some(tasks::connectivity::spawn_monitor(
                Arc::clone(&self.ctx.api),
                self.ctx.event_tx.clone(),
                period,
            ));
        }

        let initial = self.state.read().current_screen;
        self.navigate(initial);
    }

    /// Apply every queued event without waiting.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply events until every spawned task has reported back, then drain
    /// anything left in the channel.
    pub async fn settle(&mut self) {
        while self.state.read().pending_tasks > 0 {
            match self.event_rx.recv().await {
                Ok(event) => self.handle_event(event),
                Err(_) => break,
            }
        }
        self.on_tick();
    }

    /// A receiver for the event loop to select on.
    pub fn events(&self) -> Receiver<AppEvent> {
        self.event_rx.clone()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Number of spawned tasks whose result has not been applied yet
    pub fn pending_tasks(&self) -> usize {
        self.state.read().pending_tasks
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    pub fn connection(&self) -> ConnectionState {
        self.state.read().connection
    }

    pub fn session(&self) -> &Session {
        &self.ctx.session
    }

    // ---- Operator actions ----

    /// Activate a screen and run its loads. Returns the screen actually
    /// activated, which is `Login` when no token is held.
    pub fn navigate(&mut self, screen: Screen) -> Screen {
        handlers::navigation::handle_navigate(&self.ctx, screen)
    }

    pub fn login(&mut self, username: String, password: String) {
        handlers::auth::handle_login(&self.ctx, username, password);
    }

    pub fn logout(&mut self) {
        handlers::auth::handle_logout(&self.ctx, self.credentials.as_ref());
    }

    /// On-demand connectivity probe
    pub fn probe(&mut self) {
        tasks::connectivity::probe(&self.ctx);
    }

    /// Trigger a scrape run. Returns false if one is already running for
    /// this source.
    pub fn run_scraper(&mut self, source_id: i64) -> bool {
        tasks::sources::run_scrape(&self.ctx, source_id)
    }

    /// Fetch the next pending batch into the review queue.
    pub fn refill(&mut self) {
        tasks::review::refill(&self.ctx);
    }

    /// Rate `deal_id`; it must be the deal under review.
    pub fn rate(&mut self, deal_id: i64, quality: QualityScore, reason: String) -> Result<()> {
        handlers::review::handle_rate(&self.ctx, deal_id, quality, reason)
    }

    pub fn rate_current(&mut self, quality: QualityScore, reason: String) -> Result<()> {
        handlers::review::handle_rate_current(&self.ctx, quality, reason)
    }

    pub fn skip(&mut self) -> Result<()> {
        handlers::review::handle_skip(&self.ctx)
    }

    pub fn set_search(&mut self, text: Option<String>) {
        handlers::deals::handle_set_search(&self.ctx, text);
    }

    pub fn set_category(&mut self, category: Option<String>) -> Result<()> {
        handlers::deals::handle_set_category(&self.ctx, category)
    }

    /// Run a parsed operator command. `Help` and `Quit` belong to the caller
    /// and are ignored here.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!(command = command.name(), "Executing command");
        match command {
            Command::Login { username, password } => self.login(username, password),
            Command::Go(screen) => {
                self.navigate(screen);
            }
            Command::Scrape(source_id) => {
                self.run_scraper(source_id);
            }
            Command::Search(text) => self.set_search(text),
            Command::Category(category) => self.set_category(category)?,
            Command::Rate { quality, reason } => self.rate_current(quality, reason)?,
            Command::Skip => self.skip()?,
            Command::Probe => self.probe(),
            Command::Logout => self.logout(),
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    // ---- Rendering surface hooks ----

    /// View model for the current state
    pub fn frame(&self) -> Frame {
        Frame::from_state(&self.state.read())
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// True once per batch of state changes
    pub fn take_repaint(&mut self) -> bool {
        std::mem::replace(&mut self.state.write().needs_repaint, false)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(monitor) = self.monitor.take() {
            monitor.abort();
        }
    }
}
