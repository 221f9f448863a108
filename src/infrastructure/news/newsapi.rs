use crate::domain::entities::collected_data::Article;
use crate::domain::entities::query::Query;
use crate::domain::error::ProviderError;
use crate::domain::ports::news_source::NewsSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const NEWS_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_SIZE: &str = "5";

/// NewsAPI `/v2/everything` search.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<NewsApiSource>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    #[serde(default)]
    name: Option<String>,
}

impl NewsApiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(NEWS_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://newsapi.org".to_string()),
        }
    }
}

impl From<NewsApiArticle> for Article {
    fn from(a: NewsApiArticle) -> Self {
        Article {
            title: a.title.unwrap_or_default(),
            description: a.description.unwrap_or_default(),
            source: a.source.and_then(|s| s.name).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn search(&self, query: &Query) -> Result<Vec<Article>, ProviderError> {
        let url = format!("{}/v2/everything", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("q", query.text()),
                ("apiKey", self.api_key.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("pageSize", PAGE_SIZE),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transient(format!("NewsAPI request failed: {e}")))?;

        let http_status = resp.status();
        // NewsAPI reports its own errors in the body, even on non-2xx.
        let data: NewsApiResponse = resp.json().await.map_err(|e| {
            ProviderError::Transient(format!("NewsAPI {http_status}: unreadable body: {e}"))
        })?;

        parse_response(data)
    }
}

fn parse_response(data: NewsApiResponse) -> Result<Vec<Article>, ProviderError> {
    if data.status != "ok" {
        return Err(ProviderError::Transient(
            data.message.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    Ok(data.articles.into_iter().map(Article::from).collect())
}
