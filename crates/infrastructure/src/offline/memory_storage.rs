use async_trait::async_trait;
use dashmap::DashMap;
use quizgen_application::ports::CacheStorage;
use quizgen_domain::{AssetResponse, DomainError};

/// Process-local cache storage: one map of URL → response per generation.
#[derive(Default)]
pub struct InMemoryCacheStorage {
    stores: DashMap<String, DashMap<String, AssetResponse>>,
}

impl InMemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in one generation (0 if it does not exist).
    pub fn len(&self, cache_name: &str) -> usize {
        self.stores.get(cache_name).map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, cache_name: &str) -> bool {
        self.len(cache_name) == 0
    }
}

#[async_trait]
impl CacheStorage for InMemoryCacheStorage {
    async fn open(&self, cache_name: &str) -> Result<(), DomainError> {
        self.stores.entry(cache_name.to_string()).or_default();
        Ok(())
    }

    async fn match_entry(
        &self,
        cache_name: &str,
        url: &str,
    ) -> Result<Option<AssetResponse>, DomainError> {
        Ok(self
            .stores
            .get(cache_name)
            .and_then(|store| store.get(url).map(|entry| entry.value().clone())))
    }

    async fn put(
        &self,
        cache_name: &str,
        url: &str,
        response: AssetResponse,
    ) -> Result<(), DomainError> {
        self.stores
            .entry(cache_name.to_string())
            .or_default()
            .insert(url.to_string(), response);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, DomainError> {
        let mut names: Vec<String> = self.stores.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, cache_name: &str) -> Result<bool, DomainError> {
        Ok(self.stores.remove(cache_name).is_some())
    }
}
