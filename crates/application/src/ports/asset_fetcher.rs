use async_trait::async_trait;
use quizgen_domain::{AssetResponse, DomainError};

/// Network side of the offline asset cache.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetches `url`. Non-2xx replies are `Ok` responses; only transport
    /// failures are errors.
    async fn fetch(&self, url: &str) -> Result<AssetResponse, DomainError>;
}
