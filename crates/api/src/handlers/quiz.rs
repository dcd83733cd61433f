use crate::{
    dto::GenerateQuizRequest,
    errors::ApiError,
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use quizgen_domain::QuizSet;
use tracing::{debug, instrument, warn};

#[instrument(skip(state, body), name = "api_generate_quiz")]
pub async fn generate_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizSet>, ApiError> {
    // A misconfigured server answers 500 whatever the body holds.
    state.generate_quiz.ensure_configured()?;

    let request: GenerateQuizRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected quiz request body");
        if e.is_data() {
            ApiError::bad_request(format!("Invalid request body: {}", e))
        } else {
            ApiError::bad_request("Invalid JSON body")
        }
    })?;

    let quiz = state
        .generate_quiz
        .execute(request.topic, request.num_questions)
        .await?;

    Ok(Json(quiz))
}

pub async fn method_not_allowed(method: Method) -> Response {
    warn!(method = %method, "Rejected quiz request with wrong method");
    let mut response = ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
        .into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
    response
}
