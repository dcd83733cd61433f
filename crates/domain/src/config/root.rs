use super::{ConfigError, GenerationConfig, LoggingConfig, OfflineCacheConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "quizgen.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub offline: OfflineCacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file (explicit path, else `quizgen.toml` if present,
    /// else defaults), applies CLI overrides and resolves the API key from
    /// the process environment.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        config.resolve_api_key(|name| std::env::var(name).ok());

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Blank values count as absent.
    pub fn resolve_api_key<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.generation.api_key = lookup(&self.generation.api_key_env)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Invalid("server.web_port must not be 0".into()));
        }
        self.server.socket_addr()?;

        let endpoint = &self.generation.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "generation.endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }

        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::Invalid("generation.model must not be empty".into()));
        }

        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "generation.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.generation.max_questions == 0 {
            return Err(ConfigError::Invalid(
                "generation.max_questions must be greater than 0".into(),
            ));
        }

        if self.offline.cache_name.trim().is_empty() {
            return Err(ConfigError::Invalid("offline.cache_name must not be empty".into()));
        }

        Ok(())
    }
}
