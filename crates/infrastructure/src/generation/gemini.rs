use super::payload::{
    quiz_response_schema, upstream_error_message, GenerateContentRequest, GenerateContentResponse,
};
use async_trait::async_trait;
use quizgen_application::ports::QuizGenerator;
use quizgen_application::services::QuizPrompt;
use quizgen_domain::config::{GenerationConfig, SchemaMode};
use quizgen_domain::DomainError;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Quiz generator backed by a Gemini-style `generateContent` endpoint.
///
/// The key travels as the `key` query parameter, so reqwest errors are
/// stripped of their URL before they reach a log line.
pub struct GeminiQuizGenerator {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    schema_mode: SchemaMode,
    timeout: Duration,
}

impl GeminiQuizGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            url: config.generate_content_url(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            schema_mode: config.schema_mode,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn build_request(&self, prompt: &QuizPrompt) -> GenerateContentRequest {
        let schema = match self.schema_mode {
            SchemaMode::Strict => Some(quiz_response_schema()),
            SchemaMode::Loose => None,
        };
        GenerateContentRequest::new(&prompt.text, schema)
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    DomainError::Transport(e.without_url().to_string())
}

#[async_trait]
impl QuizGenerator for GeminiQuizGenerator {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &QuizPrompt) -> Result<Option<String>, DomainError> {
        let api_key = self.api_key.as_deref().ok_or(DomainError::MissingApiKey)?;
        let body = self.build_request(prompt);

        debug!(
            url = %self.url,
            model = %self.model,
            questions = prompt.question_count,
            "Sending generation request"
        );

        // One bound covers the whole exchange, headers and body alike.
        let (status, bytes) = tokio::time::timeout(self.timeout, async {
            let response = self
                .client
                .post(&self.url)
                .query(&[("key", api_key)])
                .json(&body)
                .send()
                .await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        })
        .await
        .map_err(|_| DomainError::UpstreamTimeout)?
        .map_err(transport_error)?;

        if !status.is_success() {
            let message = upstream_error_message(&bytes);
            warn!(
                status = status.as_u16(),
                message = %message,
                "Generation API returned an error"
            );
            return Err(DomainError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: GenerateContentResponse = match serde_json::from_slice(&bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(error = %e, "Undecodable generation response");
                return Ok(None);
            }
        };

        if let Some(reason) = decoded.block_reason() {
            warn!(block_reason = %reason, "Prompt was blocked by the provider");
        }

        debug!(
            candidates = decoded.candidates.len(),
            response_len = bytes.len(),
            "Generation response received"
        );

        Ok(decoded.first_text())
    }
}
