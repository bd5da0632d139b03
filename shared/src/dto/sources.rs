use serde::{Deserialize, Serialize};

/// A configured scrape source (`GET /sources`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub last_scraped: Option<String>,
}

/// Outcome of `POST /sources/{id}/scrape`.
///
/// Counts are only present when `success` is true; `error` only when it is false.
/// A body without `success` (e.g. a `{"detail": ..}` error) is a failed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScrapeRunResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_found: Option<u64>,
    #[serde(default)]
    pub new_deals: Option<u64>,
    #[serde(default)]
    pub duplicates: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
