use crate::domain::entities::analysis::Analysis;
use crate::domain::entities::collected_data::CollectedData;
use crate::domain::entities::report::Report;
use crate::domain::ports::stage::Stage;
use async_trait::async_trait;
use chrono::Utc;

pub const SUMMARY_TEMPLATE: &str =
    "This report provides comprehensive market analysis with AI-driven insights.";

pub const DEFAULT_RECOMMENDATIONS: [&str; 3] = [
    "Invest in emerging technologies",
    "Focus on customer experience",
    "Expand into new markets",
];

/// Assembles the final report. Pure: no I/O, no randomness.
pub struct ReportComposer;

impl ReportComposer {
    pub fn compose(&self, data: CollectedData, analysis: Analysis) -> Report {
        let title = format!("Market Research Report - {}", Utc::now().format("%Y-%m-%d"));
        let executive_summary = executive_summary(&analysis);
        Report::new(
            title,
            executive_summary,
            data,
            analysis,
            DEFAULT_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        )
    }
}

fn executive_summary(analysis: &Analysis) -> String {
    format!(
        "{SUMMARY_TEMPLATE} Market sentiment is {} with {} risk and {:.0}% growth potential.",
        analysis.sentiment_trend.to_string().to_lowercase(),
        analysis.risk_level.to_string().to_lowercase(),
        analysis.growth_potential.percent(),
    )
}

#[async_trait]
impl Stage for ReportComposer {
    type Input = (CollectedData, Analysis);
    type Output = Report;

    fn name(&self) -> &'static str {
        "report_composer"
    }

    async fn run(&self, input: &(CollectedData, Analysis)) -> Report {
        let (data, analysis) = input;
        self.compose(data.clone(), analysis.clone())
    }
}
