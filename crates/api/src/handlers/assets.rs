use crate::{errors::ApiError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use quizgen_domain::AssetResponse;

/// Headers describing the original transfer, not the stored body.
const SKIPPED_HEADERS: [&str; 3] = ["content-length", "transfer-encoding", "connection"];

/// Fallback for every unmatched route: the offline asset cache's fetch
/// interception point for the front-end shell.
pub async fn serve_asset(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return ApiError::new(StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    match state.offline_cache.fetch(url).await {
        Ok(asset) => asset_response(asset, method == Method::HEAD),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn asset_response(asset: AssetResponse, head_only: bool) -> Response {
    let status = StatusCode::from_u16(asset.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = if head_only {
        Body::empty()
    } else {
        Body::from(asset.body)
    };

    let mut response = (status, body).into_response();
    let headers = response.headers_mut();
    for (name, value) in &asset.headers {
        if SKIPPED_HEADERS.iter().any(|s| name.eq_ignore_ascii_case(s)) {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            headers.append(name, value);
        }
    }
    response
}
