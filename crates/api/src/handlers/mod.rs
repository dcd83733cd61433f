pub mod assets;
pub mod health;
pub mod quiz;

pub use assets::serve_asset;
pub use health::health_check;
pub use quiz::{generate_quiz, method_not_allowed};
