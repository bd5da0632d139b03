//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! controller.
//!
//! Two kinds share the channel. Gateway *signals* (connection changes, login
//! redirects, toasts) can arrive at any time. *Task results* are sent exactly
//! once by each spawned task and settle the controller's outstanding-task count.

use serde_json::Value;
use shared::{DashboardStats, Deal, DealPage, RatingStats, ScrapeRunResult, Source, SourceStatus};

use crate::app::state::{ConnectionState, Notification};
use crate::services::api::LoginOutcome;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Connection state observed by the gateway or the periodic monitor
    ConnectionChanged(ConnectionState),
    /// A gateway call came back 401
    Unauthorized { endpoint: String },
    /// Toast raised outside the controller
    Notify(Notification),

    /// Login completed
    LoginResult { username: String, outcome: LoginOutcome },
    DashboardStatsLoaded(Option<DashboardStats>),
    SourcesStatusLoaded(Option<Vec<SourceStatus>>),
    SourcesLoaded(Option<Vec<Source>>),
    ScrapeFinished {
        source_id: i64,
        result: Option<ScrapeRunResult>,
    },
    DealsLoaded(Option<DealPage>),
    RatingStatsLoaded(Option<RatingStats>),
    /// Pending batch for the review queue
    PendingLoaded(Option<Vec<Deal>>),
    RateFinished {
        deal_id: i64,
        acknowledgement: Option<Value>,
    },
    /// On-demand or startup probe completed
    ProbeFinished(bool),
}

impl AppEvent {
    /// True for events sent once by a spawned task as its result.
    pub fn is_task_result(&self) -> bool {
        !matches!(
            self,
            AppEvent::ConnectionChanged(_) | AppEvent::Unauthorized { .. } | AppEvent::Notify(_)
        )
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::ConnectionChanged(_) => "ConnectionChanged",
            AppEvent::Unauthorized { .. } => "Unauthorized",
            AppEvent::Notify(_) => "Notify",
            AppEvent::LoginResult { .. } => "LoginResult",
            AppEvent::DashboardStatsLoaded(_) => "DashboardStatsLoaded",
            AppEvent::SourcesStatusLoaded(_) => "SourcesStatusLoaded",
            AppEvent::SourcesLoaded(_) => "SourcesLoaded",
            AppEvent::ScrapeFinished { .. } => "ScrapeFinished",
            AppEvent::DealsLoaded(_) => "DealsLoaded",
            AppEvent::RatingStatsLoaded(_) => "RatingStatsLoaded",
            AppEvent::PendingLoaded(_) => "PendingLoaded",
            AppEvent::RateFinished { .. } => "RateFinished",
            AppEvent::ProbeFinished(_) => "ProbeFinished",
        }
    }
}
