//! # Core Abstractions
//!
//! Error types and the service traits the controller is written against.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Dependency injection seams (`ApiService`, `CredentialStore`)
//!
//! ```rust,ignore
//! use curator_console::core::service::ApiService;
//!
//! // In production: the reqwest-backed gateway
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, session, event_tx)?);
//!
//! // In tests: a scripted implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ApiService, CredentialStore};
