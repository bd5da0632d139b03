//! # Deal Listing Endpoint

use shared::DealPage;

use super::client::{decode, ApiClient, ApiRequest};
use crate::config::DEFAULT_DEALS_LIMIT;

/// Filters for `GET /deals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealQuery {
    pub limit: usize,
    /// Free text matched by the backend against merchant and title
    pub search: Option<String>,
    pub category: Option<String>,
}

impl Default for DealQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DEALS_LIMIT,
            search: None,
            category: None,
        }
    }
}

impl DealQuery {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Query parameters; empty filters are omitted.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("limit".to_string(), self.limit.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search".to_string(), search.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            params.push(("category".to_string(), category.to_string()));
        }
        params
    }
}

pub async fn list_deals(client: &ApiClient, query: &DealQuery) -> Option<DealPage> {
    let mut request = ApiRequest::get("/deals");
    request.query = query.params();
    decode("/deals", client.call(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_are_omitted() {
        let query = DealQuery {
            limit: 100,
            search: Some(String::new()),
            category: None,
        };
        assert_eq!(query.params(), vec![("limit".to_string(), "100".to_string())]);
    }

    #[test]
    fn test_filters_follow_limit() {
        let query = DealQuery {
            limit: 50,
            search: Some("pizza".to_string()),
            category: Some("dining".to_string()),
        };
        let params = query.params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["limit", "search", "category"]);
    }
}
