//! Cleanup of raw generator output into a typed quiz set.

use quizgen_domain::{DomainError, QuizSet};
use serde_json::Value;

const FENCE: &str = "```";

/// Returns the content of the first markdown code fence in `text`, or the
/// trimmed text when there is none. An unterminated fence yields everything
/// after the opening line.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find(FENCE) else {
        return trimmed;
    };

    let after_open = &trimmed[open + FENCE.len()..];
    // Language tag, e.g. ```json
    let tag_len = after_open
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(after_open.len());
    let body = &after_open[tag_len..];

    match body.find(FENCE) {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Span from the first `[` to the last `]`, for replies that surround the
/// array with prose.
fn bracketed_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Parses `text` as JSON, trying the bracketed span when the whole text
/// does not parse.
fn parse_lenient(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok().or_else(|| {
        bracketed_array(text).and_then(|slice| serde_json::from_str(slice).ok())
    })
}

/// Parses generator output into a [`QuizSet`].
///
/// Accepts a bare array or an object carrying a `questions` array. Text
/// that already parses is used as is, so backticks inside string values
/// survive; fences are only stripped from text that does not.
pub fn parse_quiz_set(raw: &str) -> Result<QuizSet, DomainError> {
    let trimmed = raw.trim();

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(_) => {
            let cleaned = strip_code_fences(trimmed);
            if cleaned.is_empty() {
                return Err(DomainError::EmptyResponse);
            }
            parse_lenient(cleaned)
                .or_else(|| (cleaned != trimmed).then(|| parse_lenient(trimmed)).flatten())
                .ok_or(DomainError::InvalidJsonFormat)?
        }
    };

    let items = match value {
        items @ Value::Array(_) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(questions @ Value::Array(_)) => questions,
            _ => {
                return Err(DomainError::InvalidQuizData(
                    "expected a JSON array of questions".to_string(),
                ))
            }
        },
        _ => {
            return Err(DomainError::InvalidQuizData(
                "expected a JSON array of questions".to_string(),
            ))
        }
    };

    serde_json::from_value(items).map_err(|e| DomainError::InvalidQuizData(e.to_string()))
}
