use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login form, sent `application/x-www-form-urlencoded`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body returned by the backend on rejected requests.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of `{loc, msg, type}` objects instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetail {
    /// Human-readable message, if the backend provided one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(msg) if !msg.is_empty() => Some(msg.clone()),
            Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}
