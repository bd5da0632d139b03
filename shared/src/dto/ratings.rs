use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::deals::Deal;

/// Manual quality label for a deal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QualityScore {
    Good,
    Mediocre,
    Bad,
}

impl QualityScore {
    /// Wire value used in the `quality_score` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityScore::Good => "good",
            QualityScore::Mediocre => "mediocre",
            QualityScore::Bad => "bad",
        }
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityScore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(QualityScore::Good),
            "mediocre" => Ok(QualityScore::Mediocre),
            "bad" => Ok(QualityScore::Bad),
            other => Err(format!(
                "Unknown quality score '{}': expected good, mediocre or bad",
                other
            )),
        }
    }
}

/// `GET /ratings/stats` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RatingStats {
    pub good: u64,
    pub mediocre: u64,
    pub bad: u64,
    #[serde(default)]
    pub total_rated: Option<u64>,
}

/// `GET /ratings/pending` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PendingDeals {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub deals: Vec<Deal>,
}
