pub mod prompt;
pub mod sanitizer;

pub use prompt::QuizPrompt;
pub use sanitizer::{parse_quiz_set, strip_code_fences};
