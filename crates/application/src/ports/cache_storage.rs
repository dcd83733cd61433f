use async_trait::async_trait;
use quizgen_domain::{AssetResponse, DomainError};

/// Named, versioned response stores keyed by request URL.
///
/// Mirrors the browser `CacheStorage` surface: each store is one cache
/// generation, entries never expire on their own and a store is only ever
/// dropped as a whole.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Creates the store if it does not exist yet.
    async fn open(&self, cache_name: &str) -> Result<(), DomainError>;

    /// Looks up `url` in one store. A missing store is a miss, not an error.
    async fn match_entry(
        &self,
        cache_name: &str,
        url: &str,
    ) -> Result<Option<AssetResponse>, DomainError>;

    /// Stores `response` under `url`, replacing any previous entry.
    async fn put(
        &self,
        cache_name: &str,
        url: &str,
        response: AssetResponse,
    ) -> Result<(), DomainError>;

    /// Names of every existing store.
    async fn keys(&self) -> Result<Vec<String>, DomainError>;

    /// Drops a whole store. Returns `false` if it did not exist.
    async fn delete(&self, cache_name: &str) -> Result<bool, DomainError>;
}
