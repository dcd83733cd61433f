use quizgen_domain::{CliOverrides, Config};
use tracing::{info, warn};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is up, since the level comes from the config.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        web_root = %config.server.web_root,
        model = %config.generation.model,
        schema_mode = ?config.generation.schema_mode,
        cache = %config.offline.cache_name,
        "Configuration loaded"
    );

    if config.generation.api_key.is_none() {
        warn!(
            env = %config.generation.api_key_env,
            "API key not set; quiz generation requests will fail"
        );
    }
}
