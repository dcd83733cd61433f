pub mod asset_cache;

pub use asset_cache::{InstallReport, OfflineAssetCache};
