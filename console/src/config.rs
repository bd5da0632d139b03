//! Console configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_TOKEN_FILE: &str = "./deal-curator-session.json";
pub const DEFAULT_PENDING_BATCH: usize = 20;
pub const DEFAULT_DEALS_LIMIT: usize = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend API root, e.g. `http://localhost:8000/api`
    pub api_base: String,
    /// Liveness probe target (HEAD request)
    pub probe_url: String,
    /// JSON file holding the persisted bearer token
    pub token_path: PathBuf,
    /// Transport timeout applied by the HTTP client
    pub request_timeout: Duration,
    /// Periodic probe interval; `None` probes only at startup and on demand
    pub probe_interval: Option<Duration>,
    /// Pending deals fetched per review queue refill
    pub pending_batch: usize,
    /// Row limit for the deal listing
    pub deals_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            probe_url: derive_probe_url(DEFAULT_API_BASE),
            token_path: PathBuf::from(DEFAULT_TOKEN_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            probe_interval: None,
            pending_batch: DEFAULT_PENDING_BATCH,
            deals_limit: DEFAULT_DEALS_LIMIT,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the process environment.
    ///
    /// The binary loads `.env` before calling this.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_vars(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("CURATOR_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let probe_url = lookup("CURATOR_PROBE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| derive_probe_url(&api_base));

        let token_path = lookup("CURATOR_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));

        let timeout_secs: u64 = parse_var(&lookup, "CURATOR_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let probe_secs: u64 = parse_var(&lookup, "CURATOR_PROBE_INTERVAL_SECS", 0)?;
        let pending_batch = parse_var(&lookup, "CURATOR_PENDING_BATCH", DEFAULT_PENDING_BATCH)?;
        let deals_limit = parse_var(&lookup, "CURATOR_DEALS_LIMIT", DEFAULT_DEALS_LIMIT)?;

        Ok(Self {
            api_base,
            probe_url,
            token_path,
            request_timeout: Duration::from_secs(timeout_secs),
            probe_interval: (probe_secs > 0).then(|| Duration::from_secs(probe_secs)),
            pending_batch,
            deals_limit,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(AppError::Config("CURATOR_API_BASE must not be empty".to_string()));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "CURATOR_API_BASE must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        if self.pending_batch == 0 {
            return Err(AppError::Config("CURATOR_PENDING_BATCH must be at least 1".to_string()));
        }
        if self.deals_limit == 0 {
            return Err(AppError::Config("CURATOR_DEALS_LIMIT must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// The probe hits the backend's docs page at the host root, not the API prefix.
pub fn derive_probe_url(api_base: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let root = base.strip_suffix("/api").unwrap_or(base);
    format!("{}/docs", root)
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a valid number, got '{}'", name, raw))),
    }
}
