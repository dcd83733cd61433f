use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Inbound body of `POST /generate-quiz`.
///
/// Both fields are optional at this layer so that a missing field gets the
/// use case's descriptive 400 rather than a generic decode error.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub topic: Option<String>,

    #[serde(
        rename = "numQuestions",
        default,
        deserialize_with = "integer_like"
    )]
    pub num_questions: Option<i64>,
}

/// Accepts `5`, `5.0` and `"5"`; `null` counts as absent.
fn integer_like<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    const EXPECTED: &str = "numQuestions must be an integer";

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| de::Error::custom(EXPECTED)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(EXPECTED)),
        Some(_) => Err(de::Error::custom(EXPECTED)),
    }
}
