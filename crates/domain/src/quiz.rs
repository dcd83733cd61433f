use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every generated question carries exactly this many answer options.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A validated request for a generated quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub question_count: u32,
}

impl QuizRequest {
    /// Builds a request from loosely-typed inbound fields.
    ///
    /// A blank topic counts as missing. `question_count` must fall in
    /// `1..=max_questions`.
    pub fn try_new(
        topic: Option<String>,
        question_count: Option<i64>,
        max_questions: u32,
    ) -> Result<Self, DomainError> {
        let topic = topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let (topic, count) = match (topic, question_count) {
            (Some(topic), Some(count)) => (topic, count),
            _ => {
                return Err(DomainError::InvalidRequest(
                    "Missing required fields: topic and numQuestions".to_string(),
                ))
            }
        };

        if count < 1 || count > i64::from(max_questions) {
            return Err(DomainError::InvalidRequest(format!(
                "numQuestions must be between 1 and {}",
                max_questions
            )));
        }

        Ok(Self {
            topic,
            question_count: count as u32,
        })
    }
}

/// One multiple-choice question as exchanged with the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuizItem {
    /// Checks the shape contract the generator is asked to honour.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.question_text.trim().is_empty() {
            return Err(DomainError::InvalidQuizData(
                "questionText is empty".to_string(),
            ));
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(DomainError::InvalidQuizData(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION,
                self.options.len()
            )));
        }

        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(DomainError::InvalidQuizData(
                "options must not be empty".to_string(),
            ));
        }

        let distinct: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        if distinct.len() != self.options.len() {
            return Err(DomainError::InvalidQuizData(
                "options must be distinct".to_string(),
            ));
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(DomainError::InvalidQuizData(format!(
                "correctAnswer '{}' is not one of the options",
                self.correct_answer
            )));
        }

        Ok(())
    }
}

/// Ordered quiz items; serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct QuizSet(Vec<QuizItem>);

impl QuizSet {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn into_items(self) -> Vec<QuizItem> {
        self.0
    }

    /// Validates every item, reporting the first offending position.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (index, item) in self.0.iter().enumerate() {
            item.validate().map_err(|e| match e {
                DomainError::InvalidQuizData(msg) => {
                    DomainError::InvalidQuizData(format!("question {}: {}", index + 1, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
