//! # Services
//!
//! Everything that talks to the outside world: the backend API, the
//! persisted credential, and the in-memory session shared between them.

pub mod api;
pub mod credentials;
pub mod session;

pub use api::{ApiClient, DealQuery, LoginOutcome};
pub use credentials::{FileCredentialStore, MemoryCredentialStore, TOKEN_KEY};
pub use session::Session;
