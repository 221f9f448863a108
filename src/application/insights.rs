use crate::domain::entities::analysis::{Insights, DEFAULT_INSIGHTS};
use crate::domain::entities::collected_data::CollectedData;
use crate::domain::ports::completion::{CompletionProvider, CompletionRequest};
use crate::domain::ports::stage::Stage;
use async_trait::async_trait;
use std::sync::Arc;

const SYSTEM_PROMPT: &str =
    "You are an expert market research analyst. Provide concise, actionable insights based on market data.";
const BULLETS: [char; 3] = ['-', '•', '*'];
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// Produces exactly three insights, asking a completion endpoint when one is
/// configured.
pub struct InsightGenerator {
    completion: Option<Arc<dyn CompletionProvider>>,
}

impl InsightGenerator {
    pub fn new(completion: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { completion }
    }

    pub async fn generate(&self, data: &CollectedData) -> Insights {
        let Some(completion) = &self.completion else {
            return Insights::defaults();
        };

        match completion.complete(&build_request(data)).await {
            Ok(content) => parse_insights(&content),
            Err(e) => {
                tracing::warn!(provider = completion.name(), error = %e, "using default insights");
                Insights::defaults()
            }
        }
    }
}

#[async_trait]
impl Stage for InsightGenerator {
    type Input = CollectedData;
    type Output = Insights;

    fn name(&self) -> &'static str {
        "insight_generator"
    }

    async fn run(&self, input: &CollectedData) -> Insights {
        self.generate(input).await
    }
}

pub fn build_request(data: &CollectedData) -> CompletionRequest {
    let query = &data.query;
    let summary = serde_json::json!({
        "query": query.text(),
        "industry": query.industry(),
        "timeframe": query.timeframe(),
        "trends": data.trend_metrics,
        "sentiment": data.sentiment_hint,
        "articles_found": data.articles.len(),
    });
    let summary = serde_json::to_string_pretty(&summary).unwrap_or_else(|_| summary.to_string());

    let prompt = format!(
        "Analyze this market research query and provide 3 key actionable insights:\n\n\
         Query: {}\n\
         Market Data Summary: {summary}\n\n\
         Please provide exactly 3 concise, actionable insights about this market. \
         Each insight should be a single sentence focusing on opportunities, risks, or trends.\n\n\
         Format your response as 3 separate lines, each starting with a bullet point or dash.",
        query.text()
    );

    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        prompt,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLETS.contains(&c) || c.is_whitespace())
        .trim()
}

/// Bulleted lines first; otherwise the first three non-blank lines; then
/// defaults fill whatever is still missing.
pub fn parse_insights(content: &str) -> Insights {
    let lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

    let mut insights: Vec<String> = lines
        .clone()
        .filter(|l| l.starts_with(BULLETS))
        .map(strip_bullet)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if insights.len() < 3 {
        insights = lines
            .map(strip_bullet)
            .filter(|l| !l.is_empty())
            .take(3)
            .map(String::from)
            .collect();
    }

    for default in DEFAULT_INSIGHTS {
        if insights.len() >= 3 {
            break;
        }
        if !insights.iter().any(|i| i == default) {
            insights.push(default.to_string());
        }
    }
    insights.truncate(3);

    Insights::try_from(insights).unwrap_or_else(|_| Insights::defaults())
}
