//! # Controller Tests
//!
//! Drive [`App`] against a scripted [`MockApi`] and an in-memory credential
//! store. `settle()` gives each test a deterministic point to assert at.

mod session;

use async_channel::{unbounded, Sender};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{
    DashboardStats, Deal, DealPage, QualityScore, RatingStats, ScrapeRunResult, Source, SourceStatus,
};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::app::{App, AppEvent, ConnectionState, Notification};
use crate::config::ConsoleConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, CredentialStore};
use crate::services::api::{DealQuery, LoginOutcome, TRANSPORT_FAILURE_MESSAGE};
use crate::services::{MemoryCredentialStore, Session};

/// How a scripted endpoint fails, mirroring the gateway's side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Unauthorized,
    Transport,
}

/// Scripted backend. Records every call by name and replays canned results.
pub struct MockApi {
    signals: Sender<AppEvent>,
    pub calls: Mutex<Vec<String>>,
    pub failures: Mutex<Vec<(&'static str, Failure)>>,
    pub login_outcome: Mutex<LoginOutcome>,
    pub dashboard: Mutex<Option<DashboardStats>>,
    pub sources_status: Mutex<Option<Vec<SourceStatus>>>,
    pub sources: Mutex<Option<Vec<Source>>>,
    pub scrape: Mutex<Option<ScrapeRunResult>>,
    pub deals: Mutex<Option<DealPage>>,
    pub rating_stats: Mutex<Option<RatingStats>>,
    /// Successive pending batches; an exhausted script serves empty batches
    pub pending: Mutex<VecDeque<Option<Vec<Deal>>>>,
    pub rate_ack: Mutex<Option<Value>>,
    pub reachable: Mutex<bool>,
    pub deal_queries: Mutex<Vec<DealQuery>>,
}

impl MockApi {
    pub fn new(signals: Sender<AppEvent>) -> Self {
        Self {
            signals,
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            login_outcome: Mutex::new(LoginOutcome::Authenticated {
                token: "abc".to_string(),
            }),
            dashboard: Mutex::new(Some(DashboardStats {
                total_deals: 10,
                new_deals: 2,
                good_deals: 3,
                total_structured: 8,
                total_rated: None,
            })),
            sources_status: Mutex::new(Some(Vec::new())),
            sources: Mutex::new(Some(vec![source(1, "Bank Alpha"), source(2, "Bank Beta")])),
            scrape: Mutex::new(Some(ScrapeRunResult {
                success: true,
                total_found: Some(12),
                new_deals: Some(5),
                duplicates: Some(7),
                error: None,
            })),
            deals: Mutex::new(Some(DealPage::default())),
            rating_stats: Mutex::new(Some(RatingStats {
                good: 1,
                mediocre: 0,
                bad: 0,
                total_rated: Some(1),
            })),
            pending: Mutex::new(VecDeque::new()),
            rate_ack: Mutex::new(Some(json!({"message": "Deal rated successfully"}))),
            reachable: Mutex::new(true),
            deal_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(&self, call: &'static str, failure: Failure) {
        self.failures.lock().push((call, failure));
    }

    pub fn push_batch(&self, batch: Option<Vec<Deal>>) {
        self.pending.lock().push_back(batch);
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.split('(').next() == Some(call))
            .count()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Record the call; apply a scripted failure the way the gateway would.
    async fn enter(&self, call: &'static str, record: String) -> bool {
        self.calls.lock().push(record);
        let failure = self
            .failures
            .lock()
            .iter()
            .find(|(name, _)| *name == call)
            .map(|(_, failure)| *failure);

        match failure {
            None => {
                let _ = self
                    .signals
                    .send(AppEvent::ConnectionChanged(ConnectionState::Connected))
                    .await;
                true
            }
            Some(Failure::Unauthorized) => {
                let _ = self
                    .signals
                    .send(AppEvent::Unauthorized {
                        endpoint: call.to_string(),
                    })
                    .await;
                false
            }
            Some(Failure::Transport) => {
                let _ = self
                    .signals
                    .send(AppEvent::Notify(Notification::error(TRANSPORT_FAILURE_MESSAGE)))
                    .await;
                let _ = self
                    .signals
                    .send(AppEvent::ConnectionChanged(ConnectionState::Disconnected))
                    .await;
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl ApiService for MockApi {
    async fn login(&self, username: String, _password: String) -> LoginOutcome {
        self.calls.lock().push(format!("login({})", username));
        self.login_outcome.lock().clone()
    }

    async fn dashboard_stats(&self) -> Option<DashboardStats> {
        if !self.enter("dashboard_stats", "dashboard_stats".to_string()).await {
            return None;
        }
        self.dashboard.lock().clone()
    }

    async fn sources_status(&self) -> Option<Vec<SourceStatus>> {
        if !self.enter("sources_status", "sources_status".to_string()).await {
            return None;
        }
        self.sources_status.lock().clone()
    }

    async fn list_sources(&self) -> Option<Vec<Source>> {
        if !self.enter("list_sources", "list_sources".to_string()).await {
            return None;
        }
        self.sources.lock().clone()
    }

    async fn run_scrape(&self, source_id: i64) -> Option<ScrapeRunResult> {
        if !self.enter("run_scrape", format!("run_scrape({})", source_id)).await {
            return None;
        }
        self.scrape.lock().clone()
    }

    async fn list_deals(&self, query: DealQuery) -> Option<DealPage> {
        self.deal_queries.lock().push(query.clone());
        if !self.enter("list_deals", "list_deals".to_string()).await {
            return None;
        }
        self.deals.lock().clone()
    }

    async fn rating_stats(&self) -> Option<RatingStats> {
        if !self.enter("rating_stats", "rating_stats".to_string()).await {
            return None;
        }
        self.rating_stats.lock().clone()
    }

    async fn pending_deals(&self, limit: usize) -> Option<Vec<Deal>> {
        if !self.enter("pending_deals", format!("pending_deals({})", limit)).await {
            return None;
        }
        self.pending.lock().pop_front().unwrap_or(Some(Vec::new()))
    }

    async fn rate_deal(&self, deal_id: i64, quality: QualityScore, reason: String) -> Option<Value> {
        let record = format!("rate_deal({},{},{})", deal_id, quality, reason);
        if !self.enter("rate_deal", record).await {
            return None;
        }
        self.rate_ack.lock().clone()
    }

    async fn probe(&self) -> bool {
        self.calls.lock().push("probe".to_string());
        *self.reachable.lock()
    }
}

/// Credential store whose every operation fails.
pub struct BrokenStore;

impl CredentialStore for BrokenStore {
    fn load(&self) -> Result<Option<String>> {
        Err(AppError::Storage("disk on fire".to_string()))
    }

    fn save(&self, _token: &str) -> Result<()> {
        Err(AppError::Storage("disk on fire".to_string()))
    }

    fn clear(&self) -> Result<()> {
        Err(AppError::Storage("disk on fire".to_string()))
    }
}

pub struct Harness {
    pub app: App,
    pub api: Arc<MockApi>,
    pub store: Arc<MemoryCredentialStore>,
}

/// Controller wired to a fresh mock, optionally with a restored token.
pub fn harness(token: Option<&str>) -> Harness {
    let (event_tx, event_rx) = unbounded();
    let api = Arc::new(MockApi::new(event_tx.clone()));
    let store = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::default(),
    });
    let session = Session::new(token.map(str::to_string));

    let app = App::from_parts(
        api.clone(),
        store.clone(),
        session,
        event_tx,
        event_rx,
        &ConsoleConfig::default(),
    );

    Harness { app, api, store }
}

/// Controller with an empty pending script, authenticated.
pub fn logged_in() -> Harness {
    harness(Some("abc"))
}

pub fn source(id: i64, name: &str) -> Source {
    Source {
        id,
        name: name.to_string(),
        source_type: "web".to_string(),
        url: None,
        is_active: Some(true),
        last_scraped: None,
    }
}

pub fn deal(id: i64) -> Deal {
    Deal {
        id,
        merchant_name: format!("Merchant {}", id),
        offer_title: format!("Offer {}", id),
        discount_value: Some("20%".to_string()),
        category: Some("dining".to_string()),
        description: None,
        valid_until: None,
        applicable_cards: None,
    }
}

pub fn deals(ids: &[i64]) -> Vec<Deal> {
    ids.iter().copied().map(deal).collect()
}
