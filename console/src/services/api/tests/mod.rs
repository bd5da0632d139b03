//! # Gateway Tests
//!
//! Run the real [`ApiClient`] against a scripted axum backend on an
//! ephemeral local port, and check what actually went over the wire.


use async_channel::{unbounded, Receiver};
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::app::AppEvent;
use crate::config::ConsoleConfig;
use crate::services::api::ApiClient;
use crate::services::session::Session;

/// One request as the backend received it
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

/// Backend that answers `"{METHOD} {path}"` with a scripted status and raw body.
#[derive(Clone, Default)]
pub struct FakeBackend {
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeBackend {
    pub fn respond(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.routes
            .lock()
            .insert(format!("{} {}", method, path), (status, body.to_string()));
        self
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().clone()
    }

    /// Serve on `127.0.0.1:0`; returns the host root URL.
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let router = Router::new().fallback(answer).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve fake backend");
        });
        format!("http://{}", addr)
    }
}

async fn answer(State(backend): State<FakeBackend>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    backend.seen.lock().push(Seen {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        content_type: header_value(header::CONTENT_TYPE),
        authorization: header_value(header::AUTHORIZATION),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    let key = format!("{} {}", parts.method, parts.uri.path());
    let scripted = backend.routes.lock().get(&key).cloned();
    let (status, body) = scripted.unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Root URL of a port nobody listens on.
pub async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Client for `{root}/api` with its signal receiver.
pub fn client(root: &str, token: Option<&str>) -> (ApiClient, Receiver<AppEvent>) {
    let (tx, rx) = unbounded();
    let config = ConsoleConfig {
        api_base: format!("{}/api", root),
        probe_url: format!("{}/docs", root),
        request_timeout: Duration::from_secs(5),
        ..ConsoleConfig::default()
    };
    let client = ApiClient::new(&config, Session::new(token.map(str::to_string)), tx)
        .expect("build test client");
    (client, rx)
}

/// Signals the gateway has sent so far.
pub fn signals(rx: &Receiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
