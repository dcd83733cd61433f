use serde::{Deserialize, Serialize};
use std::fmt;

/// How tightly the upstream output is constrained.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMode {
    /// JSON mime type plus an explicit response schema.
    #[default]
    Strict,
    /// JSON mime type only.
    Loose,
}

/// Upstream generation API configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Base URL of the generative-language API (default: Gemini v1beta)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub schema_mode: SchemaMode,

    /// Environment variable holding the API key (default: GEMINI_API_KEY)
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Upper bound on the outbound call in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest accepted `numQuestions` (default: 50)
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,

    /// Resolved from `api_key_env` at load time; never serialized.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl GenerationConfig {
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("schema_mode", &self.schema_mode)
            .field("api_key_env", &self.api_key_env)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_questions", &self.max_questions)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            schema_mode: SchemaMode::default(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_questions: default_max_questions(),
            api_key: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_questions() -> u32 {
    50
}
