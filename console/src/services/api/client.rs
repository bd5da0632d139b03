//! # API Gateway Client
//!
//! Every backend call except login goes through [`ApiClient::call`], which
//! owns the cross-cutting behaviour:
//!
//! - attaches `Authorization: Bearer <token>` when the session holds a token
//! - always sends a JSON content type (form-encoded login is the one exception)
//! - `401` → login redirect signal, absent result
//! - transport failure or non-JSON body → error toast + `Disconnected`, absent result
//! - any other response → `Connected`, parsed body returned as-is
//!
//! Side effects are sent on the controller's event channel *before* the
//! caller gets its result, so they are always applied first.

use async_channel::Sender;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Instant;

use crate::app::{AppEvent, ConnectionState, Notification};
use crate::config::ConsoleConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::session::Session;

/// Toast shown for every transport-level failure
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Connection failed. Check backend URL.";

/// Request payload encodings.
///
/// The backend contract mixes three encodings; each has its own constructor
/// on [`ApiRequest`] so call sites say which one they use.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// No payload; content type still declared as JSON
    Empty,
    /// JSON document
    Json(Value),
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
}

/// One outbound request, relative to the API base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    /// JSON strategy: POST with a JSON document body.
    pub fn post_json(endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: Body::Json(body),
        }
    }

    /// Query strategy: arguments travel as query parameters and the body is
    /// an empty `{}` placeholder.
    pub fn post_query(endpoint: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            query: params,
            body: Body::Json(json!({})),
        }
    }

    /// Form strategy: POST with url-encoded fields.
    pub fn post_form(endpoint: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: Body::Form(fields),
        }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Short encoding label for logs
    pub fn encoding(&self) -> &'static str {
        match (&self.body, self.query.is_empty()) {
            (Body::Form(_), _) => "form",
            (_, false) if self.method == Method::POST => "query",
            (Body::Json(_), _) => "json",
            (Body::Empty, _) => "none",
        }
    }
}

/// HTTP client for the deal curator backend.
///
/// Holds a connection pool, so create one and share it behind an `Arc`.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    probe_url: String,
    session: Session,
    signals: Sender<AppEvent>,
}

impl ApiClient {
    /// Create a client for `config.api_base`.
    ///
    /// `signals` is the controller's event channel; gateway side effects are
    /// reported there.
    pub fn new(config: &ConsoleConfig, session: Session, signals: Sender<AppEvent>) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            probe_url: config.probe_url.clone(),
            session,
            signals,
        })
    }

    pub(crate) fn probe_url(&self) -> &str {
        &self.probe_url
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build the request without credentials or gateway handling.
    pub(crate) fn build(&self, request: &ApiRequest) -> RequestBuilder {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url(&request.endpoint));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        match &request.body {
            Body::Empty => builder.header(CONTENT_TYPE, "application/json"),
            Body::Json(value) => builder.json(value),
            Body::Form(fields) => builder.form(fields),
        }
    }

    /// Gateway call: returns the parsed JSON body, or `None` after applying
    /// the unauthorized / transport-failure side effects.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint, encoding = request.encoding()))]
    pub async fn call(&self, request: ApiRequest) -> Option<Value> {
        let start = Instant::now();

        let mut builder = self.build(&request);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Transport failure");
                self.transport_failure().await;
                return None;
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Unauthorized - forcing login"
            );
            self.signal(AppEvent::Unauthorized {
                endpoint: request.endpoint.clone(),
            })
            .await;
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, status = status.as_u16(), "Failed to read response body");
                self.transport_failure().await;
                return None;
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                let duration_ms = start.elapsed().as_millis();
                if status.is_success() {
                    tracing::debug!(status = status.as_u16(), duration_ms, "API call completed");
                } else {
                    // Business errors are handed to the caller untouched
                    tracing::warn!(status = status.as_u16(), duration_ms, body = %value, "API call returned error status");
                }
                self.signal(AppEvent::ConnectionChanged(ConnectionState::Connected)).await;
                Some(value)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = status.as_u16(),
                    body_len = bytes.len(),
                    "Malformed response body - treating as transport failure"
                );
                self.transport_failure().await;
                None
            }
        }
    }

    async fn transport_failure(&self) {
        self.signal(AppEvent::Notify(Notification::error(TRANSPORT_FAILURE_MESSAGE)))
            .await;
        self.signal(AppEvent::ConnectionChanged(ConnectionState::Disconnected))
            .await;
    }

    async fn signal(&self, event: AppEvent) {
        if self.signals.send(event).await.is_err() {
            tracing::debug!("Event channel closed - dropping gateway signal");
        }
    }
}

/// Decode a gateway result into a typed DTO.
///
/// A well-formed body of the wrong shape (e.g. a `{"detail": ..}` error on a
/// stats endpoint) is logged and treated as absent, without touching the
/// connection state.
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, value: Option<Value>) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(endpoint = endpoint, error = %e, "Response did not match expected shape");
            None
        }
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: String, password: String) -> super::auth::LoginOutcome {
        super::auth::login(self, username, password).await
    }

    async fn dashboard_stats(&self) -> Option<shared::DashboardStats> {
        super::dashboard::get_stats(self).await
    }

    async fn sources_status(&self) -> Option<Vec<shared::SourceStatus>> {
        super::dashboard::get_sources_status(self).await
    }

    async fn list_sources(&self) -> Option<Vec<shared::Source>> {
        super::sources::list_sources(self).await
    }

    async fn run_scrape(&self, source_id: i64) -> Option<shared::ScrapeRunResult> {
        super::sources::run_scrape(self, source_id).await
    }

    async fn list_deals(&self, query: super::deals::DealQuery) -> Option<shared::DealPage> {
        super::deals::list_deals(self, &query).await
    }

    async fn rating_stats(&self) -> Option<shared::RatingStats> {
        super::ratings::get_stats(self).await
    }

    async fn pending_deals(&self, limit: usize) -> Option<Vec<shared::Deal>> {
        super::ratings::get_pending(self, limit).await
    }

    async fn rate_deal(&self, deal_id: i64, quality: shared::QualityScore, reason: String) -> Option<Value> {
        super::ratings::rate_deal(self, deal_id, quality, &reason).await
    }

    async fn probe(&self) -> bool {
        super::connectivity::probe(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_strategies_are_distinct() {
        let form = ApiRequest::post_form("/auth/login", vec![("username".into(), "admin".into())]);
        let query = ApiRequest::post_query("/ratings/deals/1/rate", vec![("quality_score".into(), "good".into())]);
        let json = ApiRequest::post_json("/sources/3/scrape", json!({}));
        let get = ApiRequest::get("/ratings/pending").with_query("limit", "20");

        assert_eq!(form.encoding(), "form");
        assert_eq!(query.encoding(), "query");
        assert_eq!(query.body, Body::Json(json!({})));
        assert_eq!(json.encoding(), "json");
        assert_eq!(get.encoding(), "none");
        assert_eq!(get.query, vec![("limit".to_string(), "20".to_string())]);
    }

    #[test]
    fn test_decode_wrong_shape_is_absent() {
        let stats: Option<shared::RatingStats> = decode("/ratings/stats", Some(json!({"detail": "boom"})));
        assert!(stats.is_none());

        let stats: Option<shared::RatingStats> =
            decode("/ratings/stats", Some(json!({"good": 1, "mediocre": 2, "bad": 3})));
        assert_eq!(stats.map(|s| s.mediocre), Some(2));

        let nothing: Option<shared::RatingStats> = decode("/ratings/stats", None);
        assert!(nothing.is_none());
    }
}
