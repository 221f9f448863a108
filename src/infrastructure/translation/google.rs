use crate::domain::error::ProviderError;
use crate::domain::ports::translation::TranslationService;
use crate::domain::values::language::Language;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const TRANSLATION_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Google Translate through the public `translate_a/single` endpoint
/// (no credential required).
pub struct GoogleTranslate {
    client: Client,
    base_url: String,
}

impl GoogleTranslate {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(TRANSLATION_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.unwrap_or_else(|| "https://translate.googleapis.com".to_string()),
        }
    }

    async fn translate_once(&self, text: &str, code: &str) -> Result<String, ProviderError> {
        let url = format!("{}/translate_a/single", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("client", "gtx"), ("sl", "auto"), ("tl", code), ("dt", "t"), ("q", text)])
            .send()
            .await
            .map_err(|e| ProviderError::Transient(format!("Translate request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Transient(format!(
                "Translate returned {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::Transient(format!("Parse error: {e}")))?;
        extract_translation(&body)
    }
}

/// The response is `[[["translated", "source", ...], ...], ...]`; segments
/// are concatenated in order.
fn extract_translation(body: &serde_json::Value) -> Result<String, ProviderError> {
    let segments = body
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| ProviderError::Transient("Unexpected translate payload".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|t| t.as_str()))
        .collect();

    if translated.trim().is_empty() {
        return Err(ProviderError::Transient("Empty translation".into()));
    }
    Ok(translated)
}

#[async_trait]
impl TranslationService for GoogleTranslate {
    fn name(&self) -> &str {
        "google_translate"
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, ProviderError> {
        if target == Language::English || text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let mut last_err = ProviderError::TranslationUnavailable("no attempt made".into());
        for attempt in 1..=MAX_ATTEMPTS {
            match self.translate_once(text, target.code()).await {
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "translation attempt failed");
                    last_err = e;
                }
            }
            if attempt < MAX_ATTEMPTS {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
        Err(ProviderError::TranslationUnavailable(format!(
            "failed after {MAX_ATTEMPTS} attempts: {last_err}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_joins_segments() {
        let body = serde_json::json!([
            [["Hola. ", "Hello. ", null], ["Adiós", "Goodbye", null]],
            null,
            "en"
        ]);
        assert_eq!(extract_translation(&body).unwrap(), "Hola. Adiós");
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_translation(&serde_json::json!({"error": "x"})).is_err());
        assert!(extract_translation(&serde_json::json!([[]])).is_err());
    }

    #[tokio::test]
    async fn test_english_is_passthrough() {
        let svc = GoogleTranslate::new(Some("http://127.0.0.1:9".into()));
        let out = svc.translate("Expand into new markets", Language::English).await.unwrap();
        assert_eq!(out, "Expand into new markets");
    }
}
