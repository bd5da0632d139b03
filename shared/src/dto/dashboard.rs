use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_deals: u64,
    pub new_deals: u64,
    pub good_deals: u64,
    pub total_structured: u64,
    #[serde(default)]
    pub total_rated: Option<u64>,
}

/// One row of `GET /dashboard/sources-status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceStatus {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub deal_count: u64,
    #[serde(default)]
    pub last_scraped: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
