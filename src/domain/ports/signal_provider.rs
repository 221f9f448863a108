use crate::domain::entities::analysis::MarketOutlook;
use crate::domain::entities::collected_data::TrendMetrics;
use crate::domain::entities::query::Query;
use crate::domain::values::market::SentimentTrend;
use crate::domain::values::score::UnitScore;

/// Trend indicators every collection reports, in this order.
pub const TREND_INDICATORS: [&str; 4] = [
    "ai_adoption",
    "market_growth",
    "innovation_index",
    "competition_level",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentReading {
    pub overall_score: UnitScore,
    pub trend: SentimentTrend,
    pub confidence: UnitScore,
}

/// Source of market signals that no external API supplies.
///
/// Implementations must be infallible: values are directionally plausible,
/// not authoritative.
pub trait SignalProvider: Send + Sync {
    fn name(&self) -> &str;

    /// One value per entry of [`TREND_INDICATORS`].
    fn trend_metrics(&self, query: &Query) -> TrendMetrics;

    fn sentiment(&self, query: &Query) -> SentimentReading;

    fn outlook(&self, query: &Query) -> MarketOutlook;
}
