#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::convert::Infallible;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

/// One call received by the mock generation API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub key: Option<String>,
    pub body: Value,
}

struct UpstreamState {
    status: StatusCode,
    body: String,
    delay: Duration,
    body_delay: Duration,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Stand-in for the generation API, answering every path with a canned
/// status and body.
pub struct MockUpstream {
    addr: SocketAddr,
    state: Arc<UpstreamState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: impl Into<String>, delay: Duration) -> Self {
        Self::start_with_delays(status, body, delay, Duration::ZERO).await
    }

    /// Waits `delay` before sending headers, then `body_delay` before the
    /// body.
    pub async fn start_with_delays(
        status: u16,
        body: impl Into<String>,
        delay: Duration,
        body_delay: Duration,
    ) -> Self {
        let state = Arc::new(UpstreamState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            delay,
            body_delay,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Arc<UpstreamState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    state.requests.lock().await.push(RecordedRequest {
        path: uri.path().to_string(),
        key: query.get("key").cloned(),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let headers = [(header::CONTENT_TYPE, "application/json")];
    if state.body_delay.is_zero() {
        return (state.status, headers, state.body.clone()).into_response();
    }

    let delay = state.body_delay;
    let payload = state.body.clone();
    let stream = futures::stream::once(async move {
        tokio::time::sleep(delay).await;
        Ok::<_, Infallible>(Bytes::from(payload))
    });
    (state.status, headers, Body::from_stream(stream)).into_response()
}

/// A successful `generateContent` reply carrying `text` as its only part.
pub fn gemini_reply(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
