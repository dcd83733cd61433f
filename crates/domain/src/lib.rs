//! quizgen Domain Layer
pub mod asset;
pub mod config;
pub mod errors;
pub mod quiz;

pub use asset::{AssetResponse, ResponseKind};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use quiz::{QuizItem, QuizRequest, QuizSet, OPTIONS_PER_QUESTION};
