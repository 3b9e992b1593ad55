//! Runtime configuration shared through the component tree.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://www.sankavollerei.com/anime";
const DEFAULT_SITE_NAME: &str = "AnimeStream";

/// App configuration. Every field has a default so a partial JSON document
/// (or none at all) still yields a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Applied to every outbound API call, server resolution included.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,
    /// Delay between reloading a switched source and resuming playback.
    #[serde(default = "default_switch_settle_ms")]
    pub switch_settle_ms: u64,
    #[serde(default = "default_controls_hide_ms")]
    pub controls_hide_ms: u64,
    #[serde(default)]
    pub autoplay: bool,
}

fn default_api_url() -> String {
    option_env!("ANIME_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

fn default_site_name() -> String {
    option_env!("ANIME_SITE_NAME")
        .unwrap_or(DEFAULT_SITE_NAME)
        .to_string()
}

fn default_request_timeout_secs() -> u64 {
    8
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_cache_max_entries() -> usize {
    128
}

fn default_switch_settle_ms() -> u64 {
    500
}

fn default_controls_hide_ms() -> u64 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            site_name: default_site_name(),
            request_timeout_secs: default_request_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_entries: default_cache_max_entries(),
            switch_settle_ms: default_switch_settle_ms(),
            controls_hide_ms: default_controls_hide_ms(),
            autoplay: false,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// `"<page> | <site>"`, or just the site name for an empty page title.
    pub fn page_title(&self, page: &str) -> String {
        let page = page.trim();
        if page.is_empty() {
            self.site_name.clone()
        } else {
            format!("{page} | {}", self.site_name)
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "api_url": "http://localhost:3000/" }"#).unwrap();
        assert_eq!(config.api_url, "http://localhost:3000/");
        assert_eq!(config.request_timeout_secs, 8);
        assert_eq!(config.switch_settle_ms, 500);
        assert!(!config.autoplay);
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = AppConfig {
            api_url: "http://localhost:3000/api/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/anime/one-piece"), "http://localhost:3000/api/anime/one-piece");
    }

    #[test]
    fn page_title_uses_site_name() {
        let config = AppConfig {
            site_name: "Nonton".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.page_title("Jadwal"), "Jadwal | Nonton");
        assert_eq!(config.page_title("  "), "Nonton");
    }
}
