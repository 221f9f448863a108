use crate::domain::error::ProviderError;
use crate::domain::values::language::Language;
use async_trait::async_trait;

/// Online translation of a single text.
#[async_trait]
pub trait TranslationService: Send + Sync {
    fn name(&self) -> &str;

    async fn translate(&self, text: &str, target: Language) -> Result<String, ProviderError>;
}
