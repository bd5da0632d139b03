//! # Authentication Endpoint
//!
//! Login is the only call that bypasses the gateway: it is form-encoded,
//! carries no bearer token, and reports its own failures.

use shared::{ErrorDetail, LoginForm, TokenResponse};
use serde_json::Value;

use super::client::{ApiClient, ApiRequest};

const LOGIN_FAILED: &str = "Login failed";

/// What the backend said about a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the token is not yet persisted.
    Authenticated { token: String },
    /// Backend answered but refused the credentials.
    Rejected { message: String },
    /// Backend could not be reached or replied with something other than JSON.
    Unreachable,
}

/// Exchange username and password for a bearer token.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> LoginOutcome {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let form = LoginForm { username, password };
    let request = ApiRequest::post_form(
        "/auth/login",
        vec![
            ("username".to_string(), form.username),
            ("password".to_string(), form.password),
        ],
    );

    let response = match client.build(&request).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Login network error");
            return LoginOutcome::Unreachable;
        }
    };

    let status = response.status();
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, status = status.as_u16(), "Login response was not JSON");
            return LoginOutcome::Unreachable;
        }
    };
    let duration = start.elapsed();

    if let Ok(TokenResponse { access_token, .. }) = serde_json::from_value::<TokenResponse>(body.clone()) {
        if status.is_success() && !access_token.is_empty() {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
            return LoginOutcome::Authenticated { token: access_token };
        }
    }

    let message = serde_json::from_value::<ErrorDetail>(body)
        .ok()
        .and_then(|error| error.message())
        .unwrap_or_else(|| LOGIN_FAILED.to_string());

    tracing::warn!(
        status = status.as_u16(),
        error = %message,
        duration_ms = duration.as_millis(),
        "Login failed"
    );
    LoginOutcome::Rejected { message }
}
