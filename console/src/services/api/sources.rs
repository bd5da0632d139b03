//! # Source Endpoints
//!
//! Listing configured scrape sources and triggering a scrape run.

use serde_json::json;
use shared::{ErrorDetail, ScrapeRunResult, Source};

use super::client::{decode, ApiClient, ApiRequest};

pub async fn list_sources(client: &ApiClient) -> Option<Vec<Source>> {
    decode("/sources", client.call(ApiRequest::get("/sources")).await)
}

/// Run a scrape for one source.
///
/// The backend blocks until the scrape completes, which can take a while; the
/// transport timeout bounds it. Any body that is not `success: true` is a
/// failed run. Its message is the `error` field, or else the backend's
/// `detail`. Only a gateway failure yields `None`.
#[tracing::instrument(skip(client))]
pub async fn run_scrape(client: &ApiClient, source_id: i64) -> Option<ScrapeRunResult> {
    let endpoint = format!("/sources/{}/scrape", source_id);
    let body = client
        .call(ApiRequest::post_json(endpoint.as_str(), json!({})))
        .await?;

    let detail = serde_json::from_value::<ErrorDetail>(body.clone())
        .ok()
        .and_then(|err| err.message());
    let mut run: ScrapeRunResult = decode(&endpoint, Some(body)).unwrap_or_default();
    if !run.success && run.error.is_none() {
        run.error = detail;
    }

    tracing::info!(
        success = run.success,
        total_found = ?run.total_found,
        new_deals = ?run.new_deals,
        error = ?run.error,
        "Scrape run finished"
    );
    Some(run)
}
