//! # Dashboard Endpoints

use shared::{DashboardStats, SourceStatus};

use super::client::{decode, ApiClient, ApiRequest};

const STATS: &str = "/dashboard/stats";
const SOURCES_STATUS: &str = "/dashboard/sources-status";

/// Pipeline totals for the dashboard cards.
pub async fn get_stats(client: &ApiClient) -> Option<DashboardStats> {
    decode(STATS, client.call(ApiRequest::get(STATS)).await)
}

/// Per-source deal counts and last scrape time.
pub async fn get_sources_status(client: &ApiClient) -> Option<Vec<SourceStatus>> {
    decode(SOURCES_STATUS, client.call(ApiRequest::get(SOURCES_STATUS)).await)
}
