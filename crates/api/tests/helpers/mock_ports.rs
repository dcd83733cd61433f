#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::Router;
use quizgen_api::{create_app, AppState};
use quizgen_application::ports::{AssetFetcher, QuizGenerator};
use quizgen_application::services::QuizPrompt;
use quizgen_application::use_cases::{GenerateQuizUseCase, OfflineAssetCache};
use quizgen_domain::config::OfflineCacheConfig;
use quizgen_domain::{AssetResponse, DomainError, ResponseKind};
use quizgen_infrastructure::offline::InMemoryCacheStorage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const MAX_QUESTIONS: u32 = 50;

// ============================================================================
// Mock QuizGenerator
// ============================================================================

pub struct MockQuizGenerator {
    configured: bool,
    reply: Result<Option<String>, DomainError>,
    calls: AtomicUsize,
}

impl MockQuizGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(Some(text.to_string())))
    }

    pub fn with_reply(reply: Result<Option<String>, DomainError>) -> Self {
        Self {
            configured: true,
            reply,
            calls: AtomicUsize::new(0),
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
}

#[async_trait]
impl QuizGenerator for MockQuizGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _prompt: &QuizPrompt) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

// ============================================================================
// Mock AssetFetcher
// ============================================================================

#[derive(Default)]
pub struct MockAssetFetcher {
    assets: Mutex<HashMap<String, AssetResponse>>,
    offline: Mutex<bool>,
    calls: AtomicUsize,
}

impl MockAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve_ok(&self, url: &str, content_type: &str, body: &str) {
        if let Ok(mut assets) = self.assets.lock() {
            assets.insert(
                url.to_string(),
                AssetResponse::new(200, ResponseKind::Basic, body.to_string())
                    .with_header("content-type", content_type),
            );
        }
    }

    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut flag) = self.offline.lock() {
            *flag = offline;
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcher for MockAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<AssetResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.offline.lock().unwrap() {
            return Err(DomainError::AssetFetch(format!("{} unreachable", url)));
        }
        Ok(self
            .assets
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| AssetResponse::new(404, ResponseKind::Basic, "Not Found")))
    }
}

// ============================================================================
// App builder
// ============================================================================

pub struct TestApp {
    pub app: Router,
    pub generator: Arc<MockQuizGenerator>,
    pub fetcher: Arc<MockAssetFetcher>,
    pub offline_cache: Arc<OfflineAssetCache>,
}

pub fn build_app(generator: MockQuizGenerator, assets: &[&str]) -> TestApp {
    let generator = Arc::new(generator);
    let fetcher = Arc::new(MockAssetFetcher::new());

    let config = OfflineCacheConfig {
        cache_name: "quiz-app-cache-test".to_string(),
        assets: assets.iter().map(|a| a.to_string()).collect(),
    };
    let offline_cache = Arc::new(OfflineAssetCache::new(
        config,
        Arc::new(InMemoryCacheStorage::new()),
        fetcher.clone(),
    ));

    let state = AppState {
        generate_quiz: Arc::new(GenerateQuizUseCase::new(generator.clone(), MAX_QUESTIONS)),
        offline_cache: offline_cache.clone(),
    };

    TestApp {
        app: create_app(state),
        generator,
        fetcher,
        offline_cache,
    }
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn quiz_json(count: usize) -> String {
    let items: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"questionText":"Q{i}?","options":["A{i}","B{i}","C{i}","D{i}"],"correctAnswer":"B{i}","explanation":"Because B{i}."}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}
