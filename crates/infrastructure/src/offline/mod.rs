pub mod memory_storage;
pub mod origin_fetcher;

pub use memory_storage::InMemoryCacheStorage;
pub use origin_fetcher::OriginAssetFetcher;
