use serde::{Deserialize, Serialize};

/// Categories the backend assigns to structured deals
pub const DEAL_CATEGORIES: &[&str] = &[
    "dining",
    "shopping",
    "travel",
    "lifestyle",
    "entertainment",
    "health",
    "automotive",
    "education",
    "other",
];

/// A structured offer, as returned by the deal listing and the pending-rating batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub id: i64,
    pub merchant_name: String,
    pub offer_title: String,
    #[serde(default)]
    pub discount_value: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub applicable_cards: Option<String>,
}

/// `GET /deals` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DealPage {
    pub total: u64,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

/// Returns true when `category` is one of [`DEAL_CATEGORIES`]
pub fn is_known_category(category: &str) -> bool {
    DEAL_CATEGORIES.contains(&category)
}
