use serde::{Deserialize, Serialize};

/// Offline asset cache settings.
///
/// `cache_name` identifies the current cache generation. Bumping it makes
/// the next activation drop every older generation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OfflineCacheConfig {
    #[serde(default = "default_cache_name")]
    pub cache_name: String,

    /// Manifest precached on install. Paths starting with `/` resolve
    /// against the web root; absolute URLs are fetched over the network.
    #[serde(default = "default_assets")]
    pub assets: Vec<String>,
}

fn default_cache_name() -> String {
    "quiz-app-cache-v1".to_string()
}

fn default_assets() -> Vec<String> {
    [
        "/",
        "/index.html",
        "/style.css",
        "/script.js",
        "/manifest.json",
        "https://cdn.tailwindcss.com",
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for OfflineCacheConfig {
    fn default() -> Self {
        Self {
            cache_name: default_cache_name(),
            assets: default_assets(),
        }
    }
}
