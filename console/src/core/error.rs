//! # Common Error Types
//!
//! Consolidated error handling for the curator console.
//!
//! Backend outcomes (unauthorized, transport failure, business failure) are
//! never surfaced as errors: the gateway turns them into state changes and
//! notifications. [`AppError`] covers what is left: operator actions rejected
//! locally, credential storage, and startup configuration.
//!
//! ## Error Categories
//!
//! - **Api**: Request construction problems (bad base URL, client build failure)
//! - **State**: Action not valid in the current state (skip with no deal loaded)
//! - **Validation**: Malformed operator input (unknown category, wrong deal id)
//! - **Storage**: Credential store read/write failures
//! - **Config**: Invalid environment configuration
//! - **Io**: Terminal I/O failures in the binary
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use curator_console::core::error::{AppError, Result};
//!
//! fn parse_source_id(input: &str) -> Result<i64> {
//!     input
//!         .parse()
//!         .map_err(|_| AppError::Validation(format!("Invalid source id: {}", input)))
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use curator_console::core::error::AppError;
///
/// let err = AppError::Validation("Unknown category 'pets'".to_string());
/// assert_eq!(err.to_string(), "Validation error: Unknown category 'pets'");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Request could not be built or the HTTP client could not be created.
    #[error("API error: {0}")]
    Api(String),

    /// Action is not valid in the current controller state.
    ///
    /// For example skipping while the review queue is exhausted, or rating
    /// before a batch has loaded.
    #[error("State error: {0}")]
    State(String),

    /// Operator input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Environment configuration is missing or malformed.
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
