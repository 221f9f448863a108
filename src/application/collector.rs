use crate::domain::entities::collected_data::{Article, CollectedData};
use crate::domain::entities::query::Query;
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::signal_provider::SignalProvider;
use crate::domain::ports::stage::Stage;
use crate::domain::values::market::NewsStatus;
use async_trait::async_trait;
use std::sync::Arc;

pub const COMPETITORS: [&str; 3] = ["Company A", "Company B", "Company C"];

/// Gathers news and trend signals for a query.
pub struct Collector {
    news: Option<Arc<dyn NewsSource>>,
    signals: Arc<dyn SignalProvider>,
}

impl Collector {
    /// `news` is `None` when no news credential is configured.
    pub fn new(news: Option<Arc<dyn NewsSource>>, signals: Arc<dyn SignalProvider>) -> Self {
        Self { news, signals }
    }

    pub async fn collect(&self, query: &Query) -> CollectedData {
        let (articles, news_status) = self.fetch_news(query).await;
        let trend_metrics = self.signals.trend_metrics(query);
        tracing::debug!(signals = self.signals.name(), articles = articles.len(), "collected market data");
        CollectedData::new(
            query.clone(),
            articles,
            news_status,
            trend_metrics,
            COMPETITORS.iter().map(|c| c.to_string()).collect(),
        )
    }

    async fn fetch_news(&self, query: &Query) -> (Vec<Article>, NewsStatus) {
        let Some(news) = &self.news else {
            return (vec![], NewsStatus::NoKey);
        };
        match news.search(query).await {
            Ok(articles) => (articles, NewsStatus::Ok),
            Err(e) => {
                tracing::warn!(source = news.name(), error = %e, "news fetch failed");
                (vec![], NewsStatus::Error(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl Stage for Collector {
    type Input = Query;
    type Output = CollectedData;

    fn name(&self) -> &'static str {
        "collector"
    }

    async fn run(&self, input: &Query) -> CollectedData {
        self.collect(input).await
    }
}
