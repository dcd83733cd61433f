pub mod offline;
pub mod quiz;

// Re-export use cases
pub use offline::{InstallReport, OfflineAssetCache};
pub use quiz::GenerateQuizUseCase;
