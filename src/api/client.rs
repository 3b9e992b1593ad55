// Typed client for the remote anime content API.
use crate::api::error::ApiError;
use crate::api::models::*;
use crate::cache::{keys as cache_keys, ResponseCache};
use crate::config::AppConfig;
use crate::diagnostics::{log_perf, now_ms};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Paginated catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Trending,
    Ongoing,
    Completed,
}

impl CatalogKind {
    fn path(self) -> &'static str {
        match self {
            Self::Trending => "popular",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone)]
pub struct AnimeClient {
    pub config: AppConfig,
    cache: Arc<Mutex<ResponseCache>>,
}

impl PartialEq for AnimeClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Arc::ptr_eq(&self.cache, &other.cache)
    }
}

impl AnimeClient {
    pub fn new(config: AppConfig) -> Self {
        let cache = ResponseCache::new(config.cache_max_entries);
        Self {
            config,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    pub async fn get_home(&self) -> Result<HomeData, ApiError> {
        self.get_cached("home", cache_keys::item("home", "index"))
            .await
    }

    pub async fn get_anime(&self, slug: &str) -> Result<AnimeDetail, ApiError> {
        let slug = slug.trim();
        self.get_cached(&format!("anime/{}", encode_segment(slug)), cache_keys::item("anime", slug))
            .await
    }

    pub async fn get_episode(&self, slug: &str) -> Result<EpisodeDetail, ApiError> {
        let slug = slug.trim();
        self.get_cached(
            &format!("episode/{}", encode_segment(slug)),
            cache_keys::item("episode", slug),
        )
        .await
    }

    pub async fn get_catalog(&self, kind: CatalogKind, page: u32) -> Result<AnimePage, ApiError> {
        let page = page.max(1);
        self.get_cached(
            &format!("{}?page={page}", kind.path()),
            cache_keys::list(kind.path(), page),
        )
        .await
    }

    pub async fn get_trending(&self, page: u32) -> Result<AnimePage, ApiError> {
        self.get_catalog(CatalogKind::Trending, page).await
    }

    pub async fn get_ongoing(&self, page: u32) -> Result<AnimePage, ApiError> {
        self.get_catalog(CatalogKind::Ongoing, page).await
    }

    pub async fn get_completed(&self, page: u32) -> Result<AnimePage, ApiError> {
        self.get_catalog(CatalogKind::Completed, page).await
    }

    pub async fn get_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let list: GenreList = self
            .get_cached("genres", cache_keys::item("genres", "index"))
            .await?;
        Ok(list.genre_list)
    }

    pub async fn get_genre(&self, slug: &str, page: u32) -> Result<AnimePage, ApiError> {
        let slug = slug.trim();
        let page = page.max(1);
        self.get_cached(
            &format!("genres/{}?page={page}", encode_segment(slug)),
            cache_keys::list(&format!("genre:{slug}"), page),
        )
        .await
    }

    pub async fn get_schedule(&self) -> Result<Vec<ScheduleDay>, ApiError> {
        self.get_cached("schedule", cache_keys::item("schedule", "week"))
            .await
    }

    /// Queries shorter than two characters return no results without a request.
    pub async fn search(&self, query: &str) -> Result<Vec<AnimeSummary>, ApiError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }
        let section: AnimeSection = self
            .get_cached(
                &search_path(query),
                cache_keys::item("search", &query.to_lowercase()),
            )
            .await?;
        Ok(section.anime_list)
    }

    /// Resolve a server id to a playable stream URL. Never cached: stream URLs
    /// are short-lived.
    pub async fn resolve_server(&self, server_id: &str) -> Result<String, ApiError> {
        let source: StreamSource = self
            .get_json(&format!("server/{}", encode_segment(server_id.trim())))
            .await?;
        source
            .playable_url()
            .map(str::to_string)
            .ok_or(ApiError::MissingStreamUrl)
    }

    async fn get_cached<T>(&self, path: &str, cache_key: String) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(cached) = self
            .cache
            .lock()
            .ok()
            .and_then(|cache| cache.get_json::<T>(&cache_key))
        {
            return Ok(cached);
        }

        let value: T = self.get_json(path).await?;
        if let Ok(mut cache) = self.cache.lock() {
            let _ = cache.put_json(cache_key, &value, self.config.cache_ttl());
        }
        Ok(value)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let timeout = self.config.request_timeout();
        let started = now_ms();

        let result = with_timeout(timeout, fetch_envelope::<T>(&url))
            .await
            .unwrap_or_else(|| {
                Err(ApiError::Timeout {
                    url: url.clone(),
                    secs: timeout.as_secs(),
                })
            });

        match &result {
            Ok(_) => log_perf("api.get", started, &url),
            Err(err) if err.is_not_found() => tracing::debug!(%url, "resource not found"),
            Err(err) => tracing::warn!(%url, error = %err, "api request failed"),
        }
        result
    }
}

async fn fetch_envelope<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = HTTP_CLIENT
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() == 404 {
        return Err(ApiError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

/// `None` when `future` did not finish within `timeout`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn with_timeout<F: Future>(timeout: Duration, future: F) -> Option<F::Output> {
    tokio::time::timeout(timeout, future).await.ok()
}

#[cfg(target_arch = "wasm32")]
pub async fn with_timeout<F: Future>(timeout: Duration, future: F) -> Option<F::Output> {
    use futures_util::future::{select, Either};

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = gloo_timers::future::TimeoutFuture::new(millis);
    match select(Box::pin(future), timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

fn search_path(query: &str) -> String {
    format!("search?q={}", urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_is_url_encoded() {
        assert_eq!(search_path("one piece"), "search?q=one%20piece");
        assert_eq!(search_path("re:zero"), "search?q=re%3Azero");
    }

    #[test]
    fn catalog_paths() {
        assert_eq!(CatalogKind::Trending.path(), "popular");
        assert_eq!(CatalogKind::Ongoing.path(), "ongoing");
        assert_eq!(CatalogKind::Completed.path(), "completed");
    }

    #[tokio::test]
    async fn short_search_skips_the_network() {
        let client = AnimeClient::new(AppConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        });
        assert_eq!(client.search(" a ").await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn cached_payloads_are_served_without_a_request() {
        let client = AnimeClient::new(AppConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        });
        let genres = GenreList {
            genre_list: vec![Genre {
                title: "Action".to_string(),
                genre_id: "action".to_string(),
            }],
        };
        client
            .cache
            .lock()
            .unwrap()
            .put_json(cache_keys::item("genres", "index"), &genres, Duration::from_secs(60));

        let fetched = client.get_genres().await.unwrap();
        assert_eq!(fetched, genres.genre_list);
    }

    #[tokio::test]
    async fn with_timeout_gives_up_on_slow_futures() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            1u8
        };
        assert_eq!(with_timeout(Duration::from_millis(10), slow).await, None);
        assert_eq!(with_timeout(Duration::from_secs(1), async { 2u8 }).await, Some(2));
    }
}
