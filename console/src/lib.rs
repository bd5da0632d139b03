//! # Curator Console - Library Root
//!
//! Operator console for the deal curator backend. An operator logs in,
//! watches pipeline totals, triggers scrape runs, browses structured deals,
//! and works through the queue of deals waiting for a manual quality rating.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              curator-console (this crate)              │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - Review session controller (state machine) │
//! │  services  - HTTP gateway, credential store, session   │
//! │  ui        - View models, text surface, commands       │
//! │  core      - Errors and service traits                 │
//! │  debug     - File logging                              │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── services::api (gateway calls)
//!   │   └── services::credentials (persisted token)
//!   │
//!   └── ui (frames, text surface, command parser)
//! ```
//!
//! ## Core Concepts
//!
//! Backend calls run as spawned tokio tasks and report back over an
//! `async_channel` as [`app::AppEvent`]s. The controller applies them in
//! arrival order, so the last response wins on shared display state.
//! Unauthorized and transport failures never surface as errors; they become
//! a login redirect or a disconnected indicator plus a toast.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{App, AppEvent, Screen};
pub use config::ConsoleConfig;
pub use crate::core::error::{AppError, Result};
