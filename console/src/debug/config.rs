//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_FILTER: &str = "curator_console=info,warn";

/// Logging system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Main log file name inside `log_dir`
    pub log_file_name: String,
    /// Log level filter (e.g., "curator_console=debug,info")
    pub log_level: String,
    /// Enable realtime debug log (pretty format, truncated on startup)
    pub enable_realtime_log: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "curator-console.log".to_string(),
            log_level: DEFAULT_FILTER.to_string(),
            enable_realtime_log: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_dir: lookup("CURATOR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            enable_realtime_log: lookup("CURATOR_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    pub fn realtime_log_file(&self) -> PathBuf {
        self.log_dir.join("debug-realtime.log")
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
