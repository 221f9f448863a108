use crate::domain::entities::analysis::MarketOutlook;
use crate::domain::entities::collected_data::TrendMetrics;
use crate::domain::entities::query::Query;
use crate::domain::ports::signal_provider::{SentimentReading, SignalProvider, TREND_INDICATORS};
use crate::domain::values::market::{RiskLevel, SentimentTrend};
use crate::domain::values::score::UnitScore;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Bounded-random stand-in for live analytics. Values are illustrative:
/// only their ranges are meaningful.
pub struct SimulatedSignalProvider;

impl SimulatedSignalProvider {
    pub const SENTIMENT_RANGE: RangeInclusive<f64> = 0.3..=0.9;
    pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.7..=0.95;
    pub const GROWTH_RANGE: RangeInclusive<f64> = 0.4..=0.95;

    fn indicator_range(name: &str) -> RangeInclusive<f64> {
        match name {
            "ai_adoption" => 0.6..=0.95,
            "market_growth" => 0.1..=0.3,
            "innovation_index" => 0.5..=0.9,
            "competition_level" => 0.4..=0.8,
            _ => 0.0..=1.0,
        }
    }

    fn draw(range: RangeInclusive<f64>) -> UnitScore {
        UnitScore::saturating(rand::rng().random_range(range))
    }
}

impl SignalProvider for SimulatedSignalProvider {
    fn name(&self) -> &str {
        "simulated"
    }

    fn trend_metrics(&self, _query: &Query) -> TrendMetrics {
        TREND_INDICATORS
            .iter()
            .map(|name| (name.to_string(), Self::draw(Self::indicator_range(name))))
            .collect()
    }

    fn sentiment(&self, _query: &Query) -> SentimentReading {
        let trend = SentimentTrend::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(SentimentTrend::Neutral);
        SentimentReading {
            overall_score: Self::draw(Self::SENTIMENT_RANGE),
            trend,
            confidence: Self::draw(Self::CONFIDENCE_RANGE),
        }
    }

    fn outlook(&self, _query: &Query) -> MarketOutlook {
        let risk_level = RiskLevel::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(RiskLevel::Medium);
        MarketOutlook {
            growth_potential: Self::draw(Self::GROWTH_RANGE),
            risk_level,
        }
    }
}
