//! # Connectivity Probe

use super::client::ApiClient;

/// HEAD request against the probe URL.
///
/// Any HTTP response at all, error statuses included, means the backend is
/// reachable. Only a transport failure reports it down.
pub async fn probe(client: &ApiClient) -> bool {
    match client.client.head(client.probe_url()).send().await {
        Ok(response) => {
            tracing::debug!(status = response.status().as_u16(), url = client.probe_url(), "Probe answered");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, url = client.probe_url(), "Probe failed");
            false
        }
    }
}
