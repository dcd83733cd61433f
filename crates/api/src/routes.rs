use crate::errors::ApiError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/generate-quiz",
            post(handlers::generate_quiz).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

/// Full application: `/api/*`, the root-level `/generate-quiz` alias the
/// front-end posts to, and the offline asset cache for everything else.
pub fn create_app(state: AppState) -> Router {
    let shell = Router::new()
        .route(
            "/generate-quiz",
            post(handlers::generate_quiz).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::serve_asset)
        .with_state(state.clone());

    Router::new()
        .nest("/api", create_api_routes(state))
        .merge(shell)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Request handler panicked");
    ApiError::internal().into_response()
}
