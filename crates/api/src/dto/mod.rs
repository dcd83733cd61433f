pub mod error;
pub mod quiz;

pub use error::ErrorBody;
pub use quiz::GenerateQuizRequest;
