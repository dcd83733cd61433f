use quizgen_application::use_cases::{GenerateQuizUseCase, OfflineAssetCache};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub generate_quiz: Arc<GenerateQuizUseCase>,
    pub offline_cache: Arc<OfflineAssetCache>,
}
