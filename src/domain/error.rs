use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Parse error: {0}")]
    Parse(String),

    /// A stage broke its total contract (panicked). The run is aborted.
    #[error("Stage defect in {stage}: {reason}")]
    StageDefect { stage: String, reason: String },
}

/// Failure taxonomy for outbound integrations. Stages convert every variant
/// into their fallback path; none of these escapes a stage. A provider
/// without credentials is not an error: it is simply absent (`None`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Timeout, non-2xx status, transport error or malformed payload.
    #[error("{0}")]
    Transient(String),

    #[error("Translation unavailable: {0}")]
    TranslationUnavailable(String),
}
