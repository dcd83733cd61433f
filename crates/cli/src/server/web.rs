use axum::Router;
use http::{HeaderValue, Method};
use quizgen_api::{create_app, AppState};
use quizgen_domain::config::ServerConfig;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};

pub async fn start_web_server(server: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let web_addr: SocketAddr = server.socket_addr()?;

    let app: Router = create_app(state)
        .layer(create_cors_layer(&server.cors_allowed_origins))
        .layer(CompressionLayer::new());

    info!("Web Server: http://{}", web_addr);
    info!("   Quiz API: http://{}/api/generate-quiz", web_addr);

    let listener = tokio::net::TcpListener::bind(&web_addr).await?;
    info!("Server ready! Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
