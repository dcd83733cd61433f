use async_trait::async_trait;
use quizgen_application::ports::AssetFetcher;
use quizgen_domain::{AssetResponse, DomainError, ResponseKind};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const REMOTE_TIMEOUT: Duration = Duration::from_secs(15);

/// Network side of the offline cache.
///
/// Root-relative paths are the shell's own origin and are read from the web
/// root as `basic` responses; absolute `http(s)` URLs are third-party and
/// come back as `cors` responses.
pub struct OriginAssetFetcher {
    web_root: PathBuf,
    client: reqwest::Client,
}

impl OriginAssetFetcher {
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            web_root: web_root.into(),
            client,
        }
    }

    async fn fetch_local(&self, url: &str) -> Result<AssetResponse, DomainError> {
        let Some(relative) = local_path(url) else {
            return Ok(not_found());
        };
        let path = self.web_root.join(&relative);

        match tokio::fs::read(&path).await {
            Ok(body) => {
                debug!(path = %path.display(), bytes = body.len(), "Read local asset");
                Ok(AssetResponse::new(200, ResponseKind::Basic, body)
                    .with_header("content-type", content_type_for(&relative)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(not_found()),
            Err(e) => Err(DomainError::AssetFetch(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<AssetResponse, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::AssetFetch(format!("{} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::AssetFetch(format!("reading {} failed: {}", url, e)))?;

        debug!(url = %url, status, bytes = body.len(), "Fetched remote asset");

        Ok(AssetResponse {
            status,
            kind: ResponseKind::Cors,
            headers,
            body,
        })
    }
}

#[async_trait]
impl AssetFetcher for OriginAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<AssetResponse, DomainError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            self.fetch_remote(url).await
        } else {
            self.fetch_local(url).await
        }
    }
}

fn not_found() -> AssetResponse {
    AssetResponse::new(404, ResponseKind::Basic, "Not Found")
        .with_header("content-type", "text/plain; charset=utf-8")
}

/// Maps a root-relative URL onto a web-root relative path. Directory URLs
/// resolve to their `index.html`; parent components are refused.
fn local_path(url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_start_matches('/');

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if trimmed.is_empty() || path.ends_with('/') {
        relative.push("index.html");
    }
    Some(relative)
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(local_path("/"), Some(PathBuf::from("index.html")));
        assert_eq!(local_path(""), Some(PathBuf::from("index.html")));
        assert_eq!(local_path("/docs/"), Some(PathBuf::from("docs/index.html")));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(local_path("/style.css?v=3#top"), Some(PathBuf::from("style.css")));
    }

    #[test]
    fn parent_components_are_refused() {
        assert_eq!(local_path("/../secrets.txt"), None);
        assert_eq!(local_path("/a/../../b"), None);
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Path::new("script.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }
}
