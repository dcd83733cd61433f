#![allow(dead_code)]

use async_trait::async_trait;
use quizgen_application::ports::{AssetFetcher, CacheStorage, QuizGenerator};
use quizgen_application::services::QuizPrompt;
use quizgen_domain::{AssetResponse, DomainError, ResponseKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock QuizGenerator
// ============================================================================

pub struct MockQuizGenerator {
    configured: bool,
    reply: RwLock<Result<Option<String>, DomainError>>,
    calls: AtomicUsize,
    last_prompt: RwLock<Option<QuizPrompt>>,
}

impl MockQuizGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(Some(text.to_string())))
    }

    pub fn with_reply(reply: Result<Option<String>, DomainError>) -> Self {
        Self {
            configured: true,
            reply: RwLock::new(reply),
            calls: AtomicUsize::new(0),
            last_prompt: RwLock::new(None),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("[]")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_prompt(&self) -> Option<QuizPrompt> {
        self.last_prompt.read().await.clone()
    }
}

#[async_trait]
impl QuizGenerator for MockQuizGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &QuizPrompt) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.write().await = Some(prompt.clone());
        self.reply.read().await.clone()
    }
}

// ============================================================================
// Mock CacheStorage
// ============================================================================

#[derive(Default)]
pub struct MockCacheStorage {
    stores: RwLock<BTreeMap<String, HashMap<String, AssetResponse>>>,
    fail_lookups: RwLock<bool>,
    fail_puts: RwLock<bool>,
}

impl MockCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store directly, bypassing the cache component.
    pub async fn seed(&self, cache_name: &str, url: &str, response: AssetResponse) {
        self.stores
            .write()
            .await
            .entry(cache_name.to_string())
            .or_default()
            .insert(url.to_string(), response);
    }

    pub async fn entry_count(&self, cache_name: &str) -> usize {
        self.stores
            .read()
            .await
            .get(cache_name)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    pub async fn set_fail_lookups(&self, fail: bool) {
        *self.fail_lookups.write().await = fail;
    }

    pub async fn set_fail_puts(&self, fail: bool) {
        *self.fail_puts.write().await = fail;
    }
}

#[async_trait]
impl CacheStorage for MockCacheStorage {
    async fn open(&self, cache_name: &str) -> Result<(), DomainError> {
        self.stores
            .write()
            .await
            .entry(cache_name.to_string())
            .or_default();
        Ok(())
    }

    async fn match_entry(
        &self,
        cache_name: &str,
        url: &str,
    ) -> Result<Option<AssetResponse>, DomainError> {
        if *self.fail_lookups.read().await {
            return Err(DomainError::CacheStorage("mock lookup failure".to_string()));
        }
        Ok(self
            .stores
            .read()
            .await
            .get(cache_name)
            .and_then(|store| store.get(url))
            .cloned())
    }

    async fn put(
        &self,
        cache_name: &str,
        url: &str,
        response: AssetResponse,
    ) -> Result<(), DomainError> {
        if *self.fail_puts.read().await {
            return Err(DomainError::CacheStorage("mock put failure".to_string()));
        }
        self.seed(cache_name, url, response).await;
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.stores.read().await.keys().cloned().collect())
    }

    async fn delete(&self, cache_name: &str) -> Result<bool, DomainError> {
        Ok(self.stores.write().await.remove(cache_name).is_some())
    }
}

// ============================================================================
// Mock AssetFetcher
// ============================================================================

#[derive(Default)]
pub struct MockAssetFetcher {
    responses: RwLock<HashMap<String, AssetResponse>>,
    offline: RwLock<bool>,
    calls: AtomicUsize,
}

impl MockAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn serve(&self, url: &str, response: AssetResponse) {
        self.responses
            .write()
            .await
            .insert(url.to_string(), response);
    }

    /// Serves a 200 same-origin response whose body is the URL itself.
    pub async fn serve_ok(&self, url: &str) {
        self.serve(url, AssetResponse::new(200, ResponseKind::Basic, url.to_string()))
            .await;
    }

    pub async fn set_offline(&self, offline: bool) {
        *self.offline.write().await = offline;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcher for MockAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<AssetResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.offline.read().await {
            return Err(DomainError::AssetFetch(format!("network unreachable: {}", url)));
        }
        Ok(self
            .responses
            .read()
            .await
            .get(url)
            .cloned()
            .unwrap_or_else(|| AssetResponse::new(404, ResponseKind::Basic, "Not Found")))
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
