use serde::{Deserialize, Serialize};

/// `[logging]` section.
///
/// `level` is an `EnvFilter` directive, so `"info"` and
/// `"info,quizgen_infrastructure=debug"` both work. A set `RUST_LOG`
/// replaces it entirely.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// One JSON object per line instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
