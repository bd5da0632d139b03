//! # Application State Types
//!
//! All state-related types for the console: screens, connection status,
//! notifications, and the per-screen data each screen renders.

use std::collections::HashSet;
use std::str::FromStr;

use shared::{DashboardStats, DealPage, RatingStats, Source, SourceStatus};

use crate::app::review::ReviewQueue;
use crate::services::api::DealQuery;

/// Console screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Logged-out state; the only screen reachable without a token
    Login,
    /// Pipeline totals and per-source status
    Dashboard,
    /// Source list with scrape triggers
    Scrapers,
    /// Structured deal listing with search and category filter
    Deals,
    /// Manual review queue
    Rate,
}

impl Screen {
    /// Screens reachable from the navigation bar, in display order
    pub fn all() -> &'static [Screen] {
        &[Screen::Dashboard, Screen::Scrapers, Screen::Deals, Screen::Rate]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Scrapers => "Scrapers",
            Screen::Deals => "Deals",
            Screen::Rate => "Rate Deals",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::Scrapers => "scrapers",
            Screen::Deals => "deals",
            Screen::Rate => "rate",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Screen::Login),
            "dashboard" => Ok(Screen::Dashboard),
            "scrapers" => Ok(Screen::Scrapers),
            "deals" => Ok(Screen::Deals),
            "rate" => Ok(Screen::Rate),
            other => Err(format!(
                "Unknown screen '{}': expected dashboard, scrapers, deals or rate",
                other
            )),
        }
    }
}

/// Backend reachability as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Nothing observed yet
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Unknown => "Checking...",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient toast for the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Last username submitted, kept for redisplay
    pub username: String,
    /// Inline status: validation error, "Logging in...", or the backend's message
    pub message: Option<String>,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub sources: Vec<SourceStatus>,
}

/// Scrape result panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScrapePanel {
    #[default]
    Hidden,
    Loading(String),
    Success(String),
    Error(String),
}

impl ScrapePanel {
    pub fn text(&self) -> Option<&str> {
        match self {
            ScrapePanel::Hidden => None,
            ScrapePanel::Loading(text) | ScrapePanel::Success(text) | ScrapePanel::Error(text) => {
                Some(text)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapersState {
    pub sources: Vec<Source>,
    pub panel: ScrapePanel,
}

impl ScrapersState {
    /// Display name for a source id, falling back to the id itself
    pub fn source_name(&self, source_id: i64) -> String {
        self.sources
            .iter()
            .find(|source| source.id == source_id)
            .map(|source| source.name.clone())
            .unwrap_or_else(|| format!("source {}", source_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealsState {
    pub query: DealQuery,
    pub page: Option<DealPage>,
}

/// Where the review workflow stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewPhase {
    /// Rate screen not entered yet
    #[default]
    Idle,
    /// Refill outstanding
    Loading,
    /// A deal is on the card
    Reviewing,
    /// Last refill came back empty (or absent)
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    pub queue: ReviewQueue,
    pub phase: ReviewPhase,
    pub stats: Option<RatingStats>,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    pub connection: ConnectionState,
    /// Username of the logged-in operator, when known
    pub operator: Option<String>,
    pub login: LoginState,
    pub dashboard: DashboardState,
    pub scrapers: ScrapersState,
    pub deals: DealsState,
    pub review: ReviewState,
    /// Pending notifications to display
    pub pending_notifications: Vec<Notification>,
    /// Set whenever state changes; cleared by the renderer
    pub needs_repaint: bool,
    /// Spawned tasks whose result event has not been applied yet
    pub pending_tasks: usize,
    /// In-flight guard keys (`scrape:{id}`, `rate:{id}`, `refill`, `login`)
    pub in_flight: HashSet<String>,
}

impl AppState {
    pub fn new(current_screen: Screen, deals_limit: usize) -> Self {
        Self {
            current_screen,
            connection: ConnectionState::Unknown,
            operator: None,
            login: LoginState::default(),
            dashboard: DashboardState::default(),
            scrapers: ScrapersState::default(),
            deals: DealsState {
                query: DealQuery::with_limit(deals_limit),
                page: None,
            },
            review: ReviewState::default(),
            pending_notifications: Vec::new(),
            needs_repaint: true,
            pending_tasks: 0,
            in_flight: HashSet::new(),
        }
    }

    /// Claim an in-flight key. Returns false if the action is already running.
    pub fn begin(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    pub fn finish(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
        self.needs_repaint = true;
    }

    /// Forget everything fetched for the previous operator.
    pub fn clear_screen_data(&mut self) {
        self.dashboard = DashboardState::default();
        self.scrapers = ScrapersState::default();
        self.deals.page = None;
        self.review = ReviewState::default();
    }
}

pub fn scrape_key(source_id: i64) -> String {
    format!("scrape:{}", source_id)
}

pub fn rate_key(deal_id: i64) -> String {
    format!("rate:{}", deal_id)
}

pub const REFILL_KEY: &str = "refill";
pub const LOGIN_KEY: &str = "login";
