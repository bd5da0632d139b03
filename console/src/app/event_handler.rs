//! # Event Handler
//!
//! Applies [`AppEvent`]s from background tasks and the gateway to the
//! application state, in arrival order.

use serde_json::Value;
use shared::{DashboardStats, Deal, DealPage, RatingStats, ScrapeRunResult, Source, SourceStatus};

use crate::app::handlers::navigation::handle_navigate;
use crate::app::state::{
    rate_key, scrape_key, ConnectionState, Notification, ReviewPhase, ScrapePanel, Screen,
    LOGIN_KEY, REFILL_KEY,
};
use crate::app::tasks;
use crate::app::{App, AppEvent};
use crate::services::api::LoginOutcome;

pub const WELCOME_MESSAGE: &str = "Welcome back!";
pub const CANNOT_CONNECT_MESSAGE: &str = "Cannot connect to backend";
pub const REVIEW_COMPLETE_MESSAGE: &str = "All deals rated! 🎉";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Apply one event.
    ///
    /// Task results also settle the outstanding-task count; signals do not.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.kind(), "Handling event");

        {
            let mut state = self.state.write();
            if event.is_task_result() {
                state.pending_tasks = state.pending_tasks.saturating_sub(1);
            }
            state.needs_repaint = true;
        }

        match event {
            AppEvent::ConnectionChanged(connection) => self.handle_connection_changed(connection),
            AppEvent::Unauthorized { endpoint } => self.handle_unauthorized(endpoint),
            AppEvent::Notify(notification) => self.state.write().notify(notification),
            AppEvent::LoginResult { username, outcome } => self.handle_login_result(username, outcome),
            AppEvent::DashboardStatsLoaded(stats) => self.handle_dashboard_stats(stats),
            AppEvent::SourcesStatusLoaded(rows) => self.handle_sources_status(rows),
            AppEvent::SourcesLoaded(sources) => self.handle_sources_loaded(sources),
            AppEvent::ScrapeFinished { source_id, result } => self.handle_scrape_finished(source_id, result),
            AppEvent::DealsLoaded(page) => self.handle_deals_loaded(page),
            AppEvent::RatingStatsLoaded(stats) => self.handle_rating_stats(stats),
            AppEvent::PendingLoaded(batch) => self.handle_pending_loaded(batch),
            AppEvent::RateFinished {
                deal_id,
                acknowledgement,
            } => self.handle_rate_finished(deal_id, acknowledgement),
            AppEvent::ProbeFinished(reachable) => self.handle_connection_changed(if reachable {
                ConnectionState::Connected
            } else {
                ConnectionState::Disconnected
            }),
        }
    }
}

impl App {
    fn handle_connection_changed(&mut self, connection: ConnectionState) {
        let mut state = self.state.write();
        if state.connection != connection {
            tracing::info!(from = ?state.connection, to = ?connection, "Connection state changed");
        }
        state.connection = connection;
    }

    /// 401 from any gateway call: back to `Login`, token untouched.
    fn handle_unauthorized(&mut self, endpoint: String) {
        tracing::warn!(endpoint = %endpoint, "Session rejected by backend - showing login");
        handle_navigate(&self.ctx, Screen::Login);
    }

    fn handle_login_result(&mut self, username: String, outcome: LoginOutcome) {
        tracing::info!(event = "LoginResult", outcome = outcome_label(&outcome), "Processing login result");

        {
            let mut state = self.state.write();
            state.finish(LOGIN_KEY);
            state.login.in_flight = false;
        }

        match outcome {
            LoginOutcome::Authenticated { token } => {
                if let Err(e) = self.credentials.save(&token) {
                    tracing::warn!(error = %e, "Failed to persist token - session is in-memory only");
                    self.state
                        .write()
                        .notify(Notification::warning(format!("Could not save session: {}", e)));
                }
                self.ctx.session.set_token(token);

                {
                    let mut state = self.state.write();
                    state.operator = Some(username);
                    state.login.message = None;
                    state.connection = ConnectionState::Connected;
                    state.notify(Notification::success(WELCOME_MESSAGE));
                }

                handle_navigate(&self.ctx, Screen::Dashboard);
            }
            LoginOutcome::Rejected { message } => {
                self.state.write().login.message = Some(message);
            }
            LoginOutcome::Unreachable => {
                let mut state = self.state.write();
                state.login.message = Some(CANNOT_CONNECT_MESSAGE.to_string());
                state.connection = ConnectionState::Disconnected;
            }
        }
    }

    fn handle_dashboard_stats(&mut self, stats: Option<DashboardStats>) {
        if let Some(stats) = stats {
            self.state.write().dashboard.stats = Some(stats);
        }
    }

    fn handle_sources_status(&mut self, rows: Option<Vec<SourceStatus>>) {
        if let Some(rows) = rows {
            self.state.write().dashboard.sources = rows;
        }
    }

    fn handle_sources_loaded(&mut self, sources: Option<Vec<Source>>) {
        if let Some(sources) = sources {
            tracing::debug!(count = sources.len(), "Sources loaded");
            self.state.write().scrapers.sources = sources;
        }
    }

    /// Reconcile a scrape run into the result panel.
    ///
    /// An absent result leaves the loading placeholder up; the gateway has
    /// already reported the failure.
    fn handle_scrape_finished(&mut self, source_id: i64, result: Option<ScrapeRunResult>) {
        let refresh = {
            let mut state = self.state.write();
            state.finish(&scrape_key(source_id));

            match result {
                None => false,
                Some(run) if run.success => {
                    state.scrapers.panel = ScrapePanel::Success(format!(
                        "Success! Total: {} | New: {} | Duplicates: {}",
                        run.total_found.unwrap_or(0),
                        run.new_deals.unwrap_or(0),
                        run.duplicates.unwrap_or(0)
                    ));
                    true
                }
                Some(run) => {
                    let error = run.error.unwrap_or_else(|| "Unknown error".to_string());
                    tracing::warn!(source_id, error = %error, "Scrape run failed");
                    state.scrapers.panel = ScrapePanel::Error(format!("Error: {}", error));
                    false
                }
            }
        };

        if refresh {
            tasks::sources::load_sources(&self.ctx);
        }
    }

    fn handle_deals_loaded(&mut self, page: Option<DealPage>) {
        if let Some(page) = page {
            self.state.write().deals.page = Some(page);
        }
    }

    fn handle_rating_stats(&mut self, stats: Option<RatingStats>) {
        if let Some(stats) = stats {
            self.state.write().review.stats = Some(stats);
        }
    }

    /// Replace the queue with a fresh batch. Empty or absent means done.
    fn handle_pending_loaded(&mut self, batch: Option<Vec<Deal>>) {
        let mut state = self.state.write();
        state.finish(REFILL_KEY);

        match batch {
            Some(deals) if !deals.is_empty() => {
                tracing::info!(count = deals.len(), "Review queue refilled");
                state.review.queue.replace(deals);
                state.review.phase = ReviewPhase::Reviewing;
            }
            other => {
                tracing::info!(absent = other.is_none(), "No pending deals - review complete");
                state.review.queue.replace(Vec::new());
                state.review.phase = ReviewPhase::Completed;
            }
        }
    }

    /// On acknowledgement: advance (if the deal is still current), refresh
    /// stats once, then refill if the queue ran out.
    fn handle_rate_finished(&mut self, deal_id: i64, acknowledgement: Option<Value>) {
        let refill = {
            let mut state = self.state.write();
            state.finish(&rate_key(deal_id));

            if acknowledgement.is_none() {
                tracing::warn!(deal_id, "Rating not acknowledged - deal stays on the card");
                return;
            }

            let still_current = state.review.queue.current().map(|deal| deal.id) == Some(deal_id);
            if still_current {
                state.review.queue.advance();
            } else {
                tracing::debug!(deal_id, "Queue moved on while rating was in flight");
            }
            still_current && state.review.queue.is_exhausted()
        };

        tasks::review::load_rating_stats(&self.ctx);
        if refill {
            tasks::review::refill(&self.ctx);
        }
    }
}

fn outcome_label(outcome: &LoginOutcome) -> &'static str {
    match outcome {
        LoginOutcome::Authenticated { .. } => "authenticated",
        LoginOutcome::Rejected { .. } => "rejected",
        LoginOutcome::Unreachable => "unreachable",
    }
}
