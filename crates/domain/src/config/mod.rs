//! Configuration module for quizgen
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server binding and CORS
//! - `generation`: Upstream generation API settings
//! - `offline`: Offline asset cache generation and manifest
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod generation;
pub mod logging;
pub mod offline;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use generation::{GenerationConfig, SchemaMode};
pub use logging::LoggingConfig;
pub use offline::OfflineCacheConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
