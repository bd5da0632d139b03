//! # Backend API Client Module
//!
//! HTTP client for the deal curator backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports
//! ├── client.rs       - ApiClient, request strategies, gateway call
//! ├── auth.rs         - Login (form-encoded, bypasses the gateway)
//! ├── dashboard.rs    - Dashboard stats and per-source status
//! ├── sources.rs      - Source listing and scrape runs
//! ├── deals.rs        - Deal listing with filters
//! ├── ratings.rs      - Rating stats, pending batch, rate submission
//! └── connectivity.rs - HEAD probe
//! ```

pub mod auth;
pub mod client;
pub mod connectivity;
pub mod dashboard;
pub mod deals;
pub mod ratings;
pub mod sources;

#[cfg(test)]
mod tests;

pub use auth::LoginOutcome;
pub use client::{ApiClient, ApiRequest, Body, TRANSPORT_FAILURE_MESSAGE};
pub use deals::DealQuery;
