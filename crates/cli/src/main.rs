//! # Quiz Generator
//!
//! Entry point: quiz-generation proxy plus the offline front-end shell.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use quizgen_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "quizgen")]
#[command(version)]
#[command(about = "AI-backed multiple-choice quiz generator")]
struct Cli {
    /// Path to a TOML config file (default: ./quizgen.toml if present)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    info!("Quiz Generator Starting...");

    let use_cases = di::UseCases::new(&config);

    // Precache the shell, then drop older cache generations.
    let report = use_cases.offline_cache.install().await;
    let deleted = use_cases.offline_cache.activate().await;
    info!(
        cache = %use_cases.offline_cache.cache_name(),
        cached = report.cached,
        failed = report.failed.len(),
        stale_generations_deleted = deleted.len(),
        "Offline asset cache ready"
    );

    server::start_web_server(&config.server, use_cases.into_state()).await
}
