use crate::domain::entities::analysis::SentimentAssessment;
use crate::domain::entities::query::Query;
use crate::domain::ports::signal_provider::SignalProvider;
use crate::domain::ports::stage::Stage;
use async_trait::async_trait;
use std::sync::Arc;

pub const SENTIMENT_SOURCES: [&str; 3] = ["News Articles", "Social Media", "Market Data"];

pub struct SentimentEstimator {
    signals: Arc<dyn SignalProvider>,
    social_enabled: bool,
}

impl SentimentEstimator {
    /// `social_enabled` reflects the reserved social credential; it is
    /// surfaced on the assessment but feeds no values yet.
    pub fn new(signals: Arc<dyn SignalProvider>, social_enabled: bool) -> Self {
        Self {
            signals,
            social_enabled,
        }
    }

    pub fn estimate(&self, query: &Query) -> SentimentAssessment {
        let reading = self.signals.sentiment(query);
        SentimentAssessment {
            overall_score: reading.overall_score,
            trend: reading.trend,
            sources: SENTIMENT_SOURCES.iter().map(|s| s.to_string()).collect(),
            confidence: reading.confidence,
            outlook: self.signals.outlook(query),
            social_signal: self.social_enabled,
        }
    }
}

#[async_trait]
impl Stage for SentimentEstimator {
    type Input = Query;
    type Output = SentimentAssessment;

    fn name(&self) -> &'static str {
        "sentiment_estimator"
    }

    async fn run(&self, input: &Query) -> SentimentAssessment {
        self.estimate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::signals::simulated::SimulatedSignalProvider;

    #[test]
    fn test_estimate_shape() {
        let est = SentimentEstimator::new(Arc::new(SimulatedSignalProvider), true);
        let a = est.estimate(&Query::new("fintech").unwrap());
        assert_eq!(a.sources, SENTIMENT_SOURCES);
        assert!(a.social_signal);
        assert!((0.3..=0.9).contains(&a.overall_score.value()));
        assert!((0.7..=0.95).contains(&a.confidence.value()));
    }
}
