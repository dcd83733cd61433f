use quizgen_api::AppState;
use quizgen_application::use_cases::{GenerateQuizUseCase, OfflineAssetCache};
use quizgen_domain::Config;
use quizgen_infrastructure::generation::GeminiQuizGenerator;
use quizgen_infrastructure::offline::{InMemoryCacheStorage, OriginAssetFetcher};
use std::sync::Arc;

pub struct UseCases {
    pub generate_quiz: Arc<GenerateQuizUseCase>,
    pub offline_cache: Arc<OfflineAssetCache>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let generator = Arc::new(GeminiQuizGenerator::new(&config.generation));
        let storage = Arc::new(InMemoryCacheStorage::new());
        let fetcher = Arc::new(OriginAssetFetcher::new(&config.server.web_root));

        Self {
            generate_quiz: Arc::new(GenerateQuizUseCase::new(
                generator,
                config.generation.max_questions,
            )),
            offline_cache: Arc::new(OfflineAssetCache::new(
                config.offline.clone(),
                storage,
                fetcher,
            )),
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            generate_quiz: self.generate_quiz,
            offline_cache: self.offline_cache,
        }
    }
}
