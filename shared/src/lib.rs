//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the curator console and the
//! deal-aggregation backend. All DTOs use JSON serialization via `serde`,
//! except the login form, which the backend accepts form-encoded.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login form and token responses
//!   - **[`dto::dashboard`]**: Aggregate counters and per-source status
//!   - **[`dto::sources`]**: Scrape sources and scrape run results
//!   - **[`dto::deals`]**: Structured deals and the deal listing
//!   - **[`dto::ratings`]**: Quality scores, rating stats and pending batches
//! - **[`utils`]**: Display helpers shared by every renderer
//!
//! ## Wire Format
//!
//! - Field names are snake_case on both sides, so no renames are needed
//! - Fields the backend may omit or send as `null` are `Option` with `#[serde(default)]`
//! - [`QualityScore`] serializes to the lowercase strings the backend validates against
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::ratings::PendingDeals;
//!
//! let batch: PendingDeals = serde_json::from_str(r#"{"deals": []}"#).unwrap();
//! assert!(batch.deals.is_empty());
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where every export is public API
pub use dto::*;
pub use utils::*;
