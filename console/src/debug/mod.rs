//! # Logging Infrastructure
//!
//! Structured file logging for the curator console.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup; keep the guards alive until exit
//! let _log_guards = curator_console::debug::init();
//!
//! tracing::info!(endpoint = "/ratings/pending", duration_ms = 87, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `curator_console=debug,info`)
//! - `CURATOR_LOG_DIR`: Log directory (default: `logs`)
//! - `CURATOR_DEBUG_REALTIME`: Pretty realtime log next to the main log (1=on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::LogGuards;

/// Initialize logging from the environment.
pub fn init() -> Option<LogGuards> {
    logger::init(&LogConfig::from_env())
}
