//! # Service Traits
//!
//! Seams between the controller and the outside world. The controller only
//! talks to `Arc<dyn ApiService>` and `Arc<dyn CredentialStore>`, so tests can
//! swap in scripted implementations.

use async_trait::async_trait;
use serde_json::Value;
use shared::{DashboardStats, Deal, DealPage, QualityScore, RatingStats, ScrapeRunResult, Source, SourceStatus};

use crate::core::error::Result;
use crate::services::api::{DealQuery, LoginOutcome};

/// Backend operations used by the controller.
///
/// Every business call returns `None` when the gateway produced an absent
/// result (unauthorized, transport failure, malformed or unexpected body).
/// The gateway has already applied the matching side effect by then.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Form-encoded login; bypasses the gateway's 401 interception
    async fn login(&self, username: String, password: String) -> LoginOutcome;

    /// `GET /dashboard/stats`
    async fn dashboard_stats(&self) -> Option<DashboardStats>;

    /// `GET /dashboard/sources-status`
    async fn sources_status(&self) -> Option<Vec<SourceStatus>>;

    /// `GET /sources`
    async fn list_sources(&self) -> Option<Vec<Source>>;

    /// `POST /sources/{id}/scrape`; any JSON body is a run result, failed
    /// unless it says `success: true`
    async fn run_scrape(&self, source_id: i64) -> Option<ScrapeRunResult>;

    /// `GET /deals?limit&search&category`
    async fn list_deals(&self, query: DealQuery) -> Option<DealPage>;

    /// `GET /ratings/stats`
    async fn rating_stats(&self) -> Option<RatingStats>;

    /// `GET /ratings/pending?limit`
    async fn pending_deals(&self, limit: usize) -> Option<Vec<Deal>>;

    /// `POST /ratings/deals/{id}/rate?quality_score&reason`
    async fn rate_deal(&self, deal_id: i64, quality: QualityScore, reason: String) -> Option<Value>;

    /// Liveness probe: true on any HTTP response
    async fn probe(&self) -> bool;
}

/// Persistent home of the bearer token.
pub trait CredentialStore: Send + Sync {
    /// Token saved by a previous session, if any
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}
