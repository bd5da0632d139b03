//! # Rating Endpoints
//!
//! Stats, the pending review batch, and submitting a rating.

use serde_json::Value;
use shared::{Deal, PendingDeals, QualityScore, RatingStats};

use super::client::{decode, ApiClient, ApiRequest};

const STATS: &str = "/ratings/stats";
const PENDING: &str = "/ratings/pending";

pub async fn get_stats(client: &ApiClient) -> Option<RatingStats> {
    decode(STATS, client.call(ApiRequest::get(STATS)).await)
}

/// Next batch of deals without a manual rating.
pub async fn get_pending(client: &ApiClient, limit: usize) -> Option<Vec<Deal>> {
    let request = ApiRequest::get(PENDING).with_query("limit", limit.to_string());
    decode::<PendingDeals>(PENDING, client.call(request).await).map(|batch| batch.deals)
}

/// Submit a rating.
///
/// Arguments travel as query parameters with an empty JSON body. The raw
/// acknowledgement is returned; any present value counts as success.
#[tracing::instrument(skip(client, reason))]
pub async fn rate_deal(
    client: &ApiClient,
    deal_id: i64,
    quality: QualityScore,
    reason: &str,
) -> Option<Value> {
    let request = ApiRequest::post_query(
        format!("/ratings/deals/{}/rate", deal_id),
        vec![
            ("quality_score".to_string(), quality.as_str().to_string()),
            ("reason".to_string(), reason.to_string()),
        ],
    );
    client.call(request).await
}
