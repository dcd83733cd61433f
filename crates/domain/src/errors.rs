use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Server configuration error: API key not set")]
    MissingApiKey,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Empty response from AI")]
    EmptyResponse,

    #[error("AI returned invalid JSON format")]
    InvalidJsonFormat,

    #[error("AI returned malformed quiz data: {0}")]
    InvalidQuizData(String),

    #[error("Cache storage error: {0}")]
    CacheStorage(String),

    #[error("Asset fetch failed: {0}")]
    AssetFetch(String),
}
