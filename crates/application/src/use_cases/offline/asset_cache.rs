use futures::future::join_all;
use quizgen_domain::config::OfflineCacheConfig;
use quizgen_domain::{AssetResponse, DomainError};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{AssetFetcher, CacheStorage};

/// Outcome of precaching the asset manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub cached: usize,
    pub failed: Vec<String>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read-through cache for the static front-end shell.
///
/// The hosting runtime drives the lifecycle in order: [`install`] once,
/// then [`activate`], then [`fetch`] for every intercepted request. Every
/// failure is logged and non-fatal; only `fetch` can fail, and only when the
/// network itself does.
///
/// [`install`]: OfflineAssetCache::install
/// [`activate`]: OfflineAssetCache::activate
/// [`fetch`]: OfflineAssetCache::fetch
pub struct OfflineAssetCache {
    config: OfflineCacheConfig,
    storage: Arc<dyn CacheStorage>,
    fetcher: Arc<dyn AssetFetcher>,
}

impl OfflineAssetCache {
    pub fn new(
        config: OfflineCacheConfig,
        storage: Arc<dyn CacheStorage>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            config,
            storage,
            fetcher,
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.config.cache_name
    }

    /// Opens the current generation and precaches every manifest URL.
    ///
    /// Any 2xx response is stored regardless of origin; non-2xx replies and
    /// transport errors are recorded as failures.
    #[instrument(skip(self), fields(cache = %self.config.cache_name))]
    pub async fn install(&self) -> InstallReport {
        let name = self.cache_name();

        if let Err(e) = self.storage.open(name).await {
            error!(error = %e, "Failed to open cache generation");
            return InstallReport {
                cached: 0,
                failed: self.config.assets.clone(),
            };
        }

        let fetches = self
            .config
            .assets
            .iter()
            .map(|url| async move { (url, self.fetcher.fetch(url).await) });

        let mut report = InstallReport::default();
        for (url, result) in join_all(fetches).await {
            match self.precache_one(url, result).await {
                Ok(()) => report.cached += 1,
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to precache asset");
                    report.failed.push(url.clone());
                }
            }
        }

        if report.is_complete() {
            info!(cached = report.cached, "Offline assets precached");
        } else {
            error!(
                cached = report.cached,
                failed = report.failed.len(),
                "Offline asset precache incomplete"
            );
        }

        report
    }

    async fn precache_one(
        &self,
        url: &str,
        result: Result<AssetResponse, DomainError>,
    ) -> Result<(), DomainError> {
        let response = result?;
        if !response.is_success() {
            return Err(DomainError::AssetFetch(format!(
                "{} returned HTTP {}",
                url, response.status
            )));
        }
        self.storage
            .put(self.cache_name(), &cache_key(url), response)
            .await
    }

    /// Deletes every cache generation other than the current one and
    /// returns the names removed.
    #[instrument(skip(self), fields(cache = %self.config.cache_name))]
    pub async fn activate(&self) -> Vec<String> {
        let names = match self.storage.keys().await {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, "Failed to enumerate cache generations");
                return Vec::new();
            }
        };

        let mut deleted = Vec::new();
        for name in names.into_iter().filter(|n| n != self.cache_name()) {
            match self.storage.delete(&name).await {
                Ok(true) => {
                    info!(old_cache = %name, "Deleted stale cache generation");
                    deleted.push(name);
                }
                Ok(false) => {}
                Err(e) => error!(old_cache = %name, error = %e, "Failed to delete cache generation"),
            }
        }

        deleted
    }

    /// Serves `url` from the current generation, falling back to the network
    /// and storing successful same-origin responses for later hits.
    ///
    /// Root-relative URLs are looked up, fetched and stored under their
    /// normalized path, so query strings cannot mint new entries.
    pub async fn fetch(&self, url: &str) -> Result<AssetResponse, DomainError> {
        let name = self.cache_name();
        let key = cache_key(url);
        let url = key.as_ref();

        match self.storage.match_entry(name, url).await {
            Ok(Some(hit)) => {
                debug!(url = %url, "Offline cache hit");
                return Ok(hit);
            }
            Ok(None) => debug!(url = %url, "Offline cache miss"),
            Err(e) => warn!(url = %url, error = %e, "Offline cache lookup failed"),
        }

        let response = self.fetcher.fetch(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Asset fetch failed");
            e
        })?;

        if response.is_cacheable() {
            if let Err(e) = self.storage.put(name, url, response.clone()).await {
                warn!(url = %url, error = %e, "Failed to store fetched asset");
            }
        }

        Ok(response)
    }
}

/// Identity of a request in the store. Root-relative URLs lose their query
/// and fragment and have empty and `.` segments collapsed; absolute URLs are
/// kept verbatim.
pub fn cache_key(url: &str) -> Cow<'_, str> {
    if !url.starts_with('/') {
        return Cow::Borrowed(url);
    }

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    let mut key = format!("/{}", segments.join("/"));
    if !segments.is_empty() && path.ends_with('/') {
        key.push('/');
    }

    if key == url {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(key)
    }
}
