use crate::domain::entities::query::Query;
use crate::domain::values::market::{NewsStatus, SentimentHint};
use crate::domain::values::score::UnitScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub source: String,
}

impl Article {
    /// "growth" in the title or "positive" in the description, case-insensitive.
    fn is_upbeat(&self) -> bool {
        self.title.to_lowercase().contains("growth")
            || self.description.to_lowercase().contains("positive")
    }
}

/// Named trend indicators, each in [0, 1]. Ordered so reports serialize stably.
pub type TrendMetrics = BTreeMap<String, UnitScore>;

/// Output of the collection stage. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedData {
    pub query: Query,
    pub articles: Vec<Article>,
    pub news_status: NewsStatus,
    pub trend_metrics: TrendMetrics,
    pub competitors: Vec<String>,
    pub sentiment_hint: SentimentHint,
    pub collected_at: DateTime<Utc>,
}

impl CollectedData {
    pub fn new(
        query: Query,
        articles: Vec<Article>,
        news_status: NewsStatus,
        trend_metrics: TrendMetrics,
        competitors: Vec<String>,
    ) -> Self {
        let sentiment_hint = sentiment_hint(&articles);
        Self {
            query,
            articles,
            news_status,
            trend_metrics,
            competitors,
            sentiment_hint,
            collected_at: Utc::now(),
        }
    }
}

/// Positive iff strictly more than half the articles carry a positive marker.
pub fn sentiment_hint(articles: &[Article]) -> SentimentHint {
    if articles.is_empty() {
        return SentimentHint::Neutral;
    }
    let upbeat = articles.iter().filter(|a| a.is_upbeat()).count();
    if upbeat * 2 > articles.len() {
        SentimentHint::Positive
    } else {
        SentimentHint::Neutral
    }
}
