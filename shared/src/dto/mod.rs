//! # Data Transfer Objects (DTOs)
//!
//! Every structure exchanged with the deal-aggregation backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login form, token response and error detail
//! - [`dashboard`] - Dashboard counters and source status rows
//! - [`sources`] - Scrape sources and scrape run results
//! - [`deals`] - Structured deals and paged listings
//! - [`ratings`] - Quality scores, rating stats and pending batches
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=admin&password=admin123
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "access_token": "eyJhbGciOiJIUzI1NiIs...", "token_type": "bearer" }
//! ```

pub mod auth;
pub mod dashboard;
pub mod deals;
pub mod ratings;
pub mod sources;

pub use auth::*;
pub use dashboard::*;
pub use deals::*;
pub use ratings::*;
pub use sources::*;
