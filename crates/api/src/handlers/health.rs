use crate::state::AppState;
use axum::extract::State;
use tracing::debug;

/// Liveness only; generation readiness is reported per request.
pub async fn health_check(State(state): State<AppState>) -> &'static str {
    debug!(cache = %state.offline_cache.cache_name(), "Health check requested");
    "OK"
}
