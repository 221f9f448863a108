use crate::domain::entities::collected_data::Article;
use crate::domain::entities::query::Query;
use crate::domain::error::ProviderError;
use async_trait::async_trait;

/// Pluggable news search. Only wired when a news credential exists.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, query: &Query) -> Result<Vec<Article>, ProviderError>;
}
