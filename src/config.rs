use serde::Deserialize;
use std::time::Duration;

/// Client configuration loaded from `MOVIE_FINDER_*` environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog/favorites service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Quiet period after the last keystroke before a search is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Normalized queries shorter than this (in chars) never hit the network
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Favorites required before recommendations are offered
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: usize,

    /// Initial user for the terminal front end
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_debounce_ms() -> u64 {
    350
}

fn default_min_query_len() -> usize {
    2
}

fn default_recommendation_threshold() -> usize {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            recommendation_threshold: default_recommendation_threshold(),
            user_id: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("MOVIE_FINDER_")
            .from_env::<ClientConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
