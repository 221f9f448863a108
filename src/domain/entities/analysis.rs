use crate::domain::error::DomainError;
use crate::domain::values::market::{RiskLevel, SentimentTrend};
use crate::domain::values::score::UnitScore;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Static insights used whenever the completion endpoint is unavailable.
pub const DEFAULT_INSIGHTS: [&str; 3] = [
    "Strong growth potential in emerging markets",
    "Increasing adoption of AI technologies",
    "Competitive landscape is evolving rapidly",
];

/// Exactly three insight strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insights([String; 3]);

impl Insights {
    pub fn defaults() -> Self {
        Self(DEFAULT_INSIGHTS.map(String::from))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Insights {
    type Error = DomainError;

    fn try_from(v: Vec<String>) -> Result<Self, Self::Error> {
        let len = v.len();
        let arr: [String; 3] = v.try_into().map_err(|_| {
            DomainError::InvalidInput(format!("Expected exactly 3 insights, got {len}"))
        })?;
        Ok(Self(arr))
    }
}

impl Index<usize> for Insights {
    type Output = String;

    fn index(&self, i: usize) -> &String {
        &self.0[i]
    }
}

/// Growth and risk outlook that accompanies a sentiment read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketOutlook {
    pub growth_potential: UnitScore,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAssessment {
    pub overall_score: UnitScore,
    pub trend: SentimentTrend,
    pub sources: Vec<String>,
    pub confidence: UnitScore,
    pub outlook: MarketOutlook,
    /// Set when the reserved social credential is configured.
    pub social_signal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment_score: UnitScore,
    pub growth_potential: UnitScore,
    pub risk_level: RiskLevel,
    pub insights: Insights,
    pub sentiment_trend: SentimentTrend,
    pub data_sources: Vec<String>,
    pub confidence: UnitScore,
}

impl Analysis {
    pub fn new(assessment: SentimentAssessment, insights: Insights) -> Self {
        Self {
            sentiment_score: assessment.overall_score,
            growth_potential: assessment.outlook.growth_potential,
            risk_level: assessment.outlook.risk_level,
            insights,
            sentiment_trend: assessment.trend,
            data_sources: assessment.sources,
            confidence: assessment.confidence,
        }
    }
}
