//! quizgen Infrastructure Layer
pub mod generation;
pub mod offline;
