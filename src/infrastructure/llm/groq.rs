use crate::domain::error::ProviderError;
use crate::domain::ports::completion::{CompletionProvider, CompletionRequest};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible chat completions, Groq by default.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    pub fn new(api_key: String, model: Option<String>, url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(COMPLETION_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| "llama3-8b-8192".to_string()),
            url: url.unwrap_or_else(|| {
                "https://api.groq.com/openai/v1/chat/completions".to_string()
            }),
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: 1.0,
            stream: false,
        };

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Transient("Groq request timed out".to_string())
                } else {
                    ProviderError::Transient(format!("Groq API error: {e}"))
                }
            })?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Transient(format!("Groq API {status}: {text}")));
        }

        let result: ChatResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Transient(format!("Parse error: {e}")))?;
        first_choice(result)
    }
}

fn first_choice(resp: ChatResponse) -> Result<String, ProviderError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .ok_or_else(|| ProviderError::Transient("Groq response had no content".to_string()))
}
