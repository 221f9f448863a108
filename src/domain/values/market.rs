use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentTrend {
    Bullish,
    Bearish,
    Neutral,
    Volatile,
}

impl SentimentTrend {
    pub const ALL: [SentimentTrend; 4] = [
        SentimentTrend::Bullish,
        SentimentTrend::Bearish,
        SentimentTrend::Neutral,
        SentimentTrend::Volatile,
    ];
}

impl fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentTrend::Bullish => write!(f, "Bullish"),
            SentimentTrend::Bearish => write!(f, "Bearish"),
            SentimentTrend::Neutral => write!(f, "Neutral"),
            SentimentTrend::Volatile => write!(f, "Volatile"),
        }
    }
}

/// Coarse tone of the collected news.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentHint {
    Positive,
    #[default]
    Neutral,
}

impl fmt::Display for SentimentHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentHint::Positive => write!(f, "positive"),
            SentimentHint::Neutral => write!(f, "neutral"),
        }
    }
}

/// Outcome of the news fetch. `NoKey` is a normal state, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum NewsStatus {
    Ok,
    NoKey,
    Error(String),
}

impl fmt::Display for NewsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsStatus::Ok => write!(f, "ok"),
            NewsStatus::NoKey => write!(f, "No API key"),
            NewsStatus::Error(reason) => write!(f, "API Error: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_status_serialization() {
        let json = serde_json::to_value(NewsStatus::Error("rate limited".into())).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["reason"], "rate limited");

        let json = serde_json::to_value(NewsStatus::NoKey).unwrap();
        assert_eq!(json["kind"], "no_key");
    }
}
