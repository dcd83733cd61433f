use crate::dto::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quizgen_domain::DomainError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// JSON error reply: `{ "error": "<message>" }`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let display = e.to_string();
        match e {
            DomainError::MissingApiKey => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error")
            }
            DomainError::InvalidRequest(msg) => Self::bad_request(msg),
            DomainError::Upstream { status, message } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            DomainError::UpstreamTimeout => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, "Quiz generation timed out")
            }
            DomainError::EmptyResponse
            | DomainError::InvalidJsonFormat
            | DomainError::InvalidQuizData(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, display)
            }
            DomainError::AssetFetch(_) => Self::new(StatusCode::BAD_GATEWAY, "Asset unavailable"),
            DomainError::Transport(_) | DomainError::CacheStorage(_) => Self::internal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
