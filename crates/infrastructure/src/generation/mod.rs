pub mod gemini;
pub mod payload;

pub use gemini::GeminiQuizGenerator;
