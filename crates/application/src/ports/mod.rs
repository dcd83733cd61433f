mod asset_fetcher;
mod cache_storage;
mod quiz_generator;

pub use asset_fetcher::AssetFetcher;
pub use cache_storage::CacheStorage;
pub use quiz_generator::QuizGenerator;
