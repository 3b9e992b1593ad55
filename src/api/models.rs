use serde::{Deserialize, Deserializer, Serialize};

/// `{ "data": ... }` wrapper used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Scores arrive as `8.5`, `"8.50"` or `{ "value": "8.5", "users": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
    Detailed {
        #[serde(default)]
        value: Option<serde_json::Value>,
    },
}

impl Score {
    /// One decimal for numeric scores, trimmed text otherwise, `None` when blank.
    pub fn label(&self) -> Option<String> {
        let raw = match self {
            Self::Number(number) => return number.is_finite().then(|| format!("{number:.1}")),
            Self::Text(text) => text.trim().to_string(),
            Self::Detailed { value } => match value {
                Some(serde_json::Value::Number(number)) => {
                    return number.as_f64().map(|value| format!("{value:.1}"))
                }
                Some(serde_json::Value::String(text)) => text.trim().to_string(),
                _ => String::new(),
            },
        };
        if raw.is_empty() || raw == "0" || raw.eq_ignore_ascii_case("n/a") {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(number) => Some(format!("{number:.1}")),
            Err(_) => Some(raw),
        }
    }
}

/// Accepts `12`, `"12"`, `"12 eps"`, `"?"` or null.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number
            .as_u64()
            .and_then(|value| u32::try_from(value).ok()),
        Some(serde_json::Value::String(text)) => {
            let digits: String = text
                .trim()
                .chars()
                .take_while(|ch| ch.is_ascii_digit())
                .collect();
            digits.parse::<u32>().ok()
        }
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSummary {
    #[serde(default, alias = "slug")]
    pub anime_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "latestReleaseDate", alias = "lastReleaseDate")]
    pub released_on: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
}

impl AnimeSummary {
    /// Falls back to a title-cased slug when the API omits the title.
    pub fn display_title(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            crate::utils::title_from_slug(&self.anime_id)
        } else {
            title.to_string()
        }
    }

    pub fn score_label(&self) -> Option<String> {
        self.score.as_ref().and_then(Score::label)
    }

    pub fn status_tone(&self) -> StatusTone {
        StatusTone::from_status(self.status.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Ongoing,
    Completed,
    Upcoming,
    Neutral,
}

impl StatusTone {
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return Self::Neutral;
        };
        let lower = status.to_ascii_lowercase();
        if lower.contains("ongoing") {
            Self::Ongoing
        } else if lower.contains("completed") {
            Self::Completed
        } else if lower.contains("upcoming") {
            Self::Upcoming
        } else {
            Self::Neutral
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Ongoing => "bg-yellow-500 text-black",
            Self::Completed => "bg-green-600 text-white",
            Self::Upcoming => "bg-blue-600 text-white",
            Self::Neutral => "bg-gray-800 text-gray-300",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_prev_page: bool,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimePage {
    #[serde(default)]
    pub anime_list: Vec<AnimeSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSection {
    #[serde(default)]
    pub anime_list: Vec<AnimeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    #[serde(default)]
    pub recent: Option<AnimeSection>,
    #[serde(default)]
    pub movie: Option<AnimeSection>,
    #[serde(default)]
    pub top10: Option<AnimeSection>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_anime: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenreList {
    #[serde(default)]
    pub genre_list: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub episode_id: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Synopsis {
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// A batch (whole-season) download page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub batch_id: String,
    #[serde(default)]
    pub samehadaku_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub japanese: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub producers: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub aired: Option<String>,
    #[serde(default)]
    pub studios: Option<String>,
    #[serde(default)]
    pub genre_list: Vec<Genre>,
    #[serde(default)]
    pub synopsis: Synopsis,
    #[serde(default)]
    pub episode_list: Vec<EpisodeRef>,
    #[serde(default)]
    pub batch_list: Vec<BatchLink>,
}

impl AnimeDetail {
    /// Download page of the first batch, if it has one.
    pub fn batch_download_url(&self) -> Option<&str> {
        self.batch_list
            .first()?
            .samehadaku_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// English title when present, then the main title.
    pub fn display_title(&self) -> String {
        self.english
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.title.trim())
            .to_string()
    }

    /// First synopsis paragraph cut at 160 characters, for the page description.
    pub fn short_description(&self) -> Option<String> {
        let first = self.synopsis.paragraphs.first()?.trim();
        if first.is_empty() {
            return None;
        }
        Some(first.chars().take(160).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub server_id: String,
}

/// One quality tier (e.g. `480p`) and its servers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerTier {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub server_list: Vec<ServerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EpisodeServers {
    #[serde(default)]
    pub qualities: Vec<ServerTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub anime_id: String,
    #[serde(default)]
    pub anime_title: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub release_time: Option<String>,
    #[serde(default)]
    pub default_streaming_url: String,
    #[serde(default)]
    pub prev_episode: Option<EpisodeRef>,
    #[serde(default)]
    pub next_episode: Option<EpisodeRef>,
    #[serde(default)]
    pub server: EpisodeServers,
}

/// Playable URL returned by server resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StreamSource {
    #[serde(default)]
    pub url: Option<String>,
}

impl StreamSource {
    pub fn playable_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default, alias = "slug")]
    pub anime_id: String,
    #[serde(default, alias = "anime_name")]
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    #[serde(default)]
    pub day: String,
    #[serde(default, alias = "anime_list")]
    pub anime_list: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_number_text_and_object() {
        let number: Score = serde_json::from_str("8.456").unwrap();
        let text: Score = serde_json::from_str("\"7.20\"").unwrap();
        let object: Score = serde_json::from_str(r#"{ "value": "6.9", "users": "12,000" }"#).unwrap();
        let blank: Score = serde_json::from_str("\"\"").unwrap();

        assert_eq!(number.label().as_deref(), Some("8.5"));
        assert_eq!(text.label().as_deref(), Some("7.2"));
        assert_eq!(object.label().as_deref(), Some("6.9"));
        assert_eq!(blank.label(), None);
    }

    #[test]
    fn anime_summary_tolerates_loose_fields() {
        let anime: AnimeSummary = serde_json::from_str(
            r#"{ "slug": "one-piece", "title": "", "episodes": "1100 eps", "type": "TV", "status": "Ongoing" }"#,
        )
        .unwrap();

        assert_eq!(anime.anime_id, "one-piece");
        assert_eq!(anime.display_title(), "One Piece");
        assert_eq!(anime.episodes, Some(1100));
        assert_eq!(anime.kind.as_deref(), Some("TV"));
        assert_eq!(anime.status_tone(), StatusTone::Ongoing);
    }

    #[test]
    fn episode_detail_parses_server_catalog() {
        let payload = r#"{
            "data": {
                "title": "Episode 1",
                "animeId": "frieren",
                "defaultStreamingUrl": "https://x/a1.m3u8",
                "server": { "qualities": [
                    { "title": "360p", "serverList": [] },
                    { "title": "480p", "serverList": [ { "title": "Server A", "serverId": "a1" } ] }
                ] }
            }
        }"#;
        let parsed: Envelope<EpisodeDetail> = serde_json::from_str(payload).unwrap();
        let episode = parsed.data;

        assert_eq!(episode.default_streaming_url, "https://x/a1.m3u8");
        assert_eq!(episode.server.qualities.len(), 2);
        assert_eq!(episode.server.qualities[1].server_list[0].server_id, "a1");
    }

    #[test]
    fn stream_source_rejects_blank_urls() {
        let blank: StreamSource = serde_json::from_str(r#"{ "url": "  " }"#).unwrap();
        let missing: StreamSource = serde_json::from_str("{}").unwrap();
        let ok: StreamSource = serde_json::from_str(r#"{ "url": "https://x/b2.m3u8" }"#).unwrap();

        assert_eq!(blank.playable_url(), None);
        assert_eq!(missing.playable_url(), None);
        assert_eq!(ok.playable_url(), Some("https://x/b2.m3u8"));
    }

    #[test]
    fn batch_download_uses_first_batch() {
        let detail: AnimeDetail = serde_json::from_str(
            r#"{
                "title": "Frieren",
                "batchList": [
                    { "title": "Frieren Batch", "batchId": "frieren-batch", "samehadakuUrl": "https://dl.example/frieren" },
                    { "title": "Extra", "batchId": "extra", "samehadakuUrl": "https://dl.example/extra" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.batch_list[0].batch_id, "frieren-batch");
        assert_eq!(detail.batch_download_url(), Some("https://dl.example/frieren"));

        let blank: AnimeDetail =
            serde_json::from_str(r#"{ "batchList": [{ "samehadakuUrl": " " }] }"#).unwrap();
        assert_eq!(blank.batch_download_url(), None);
        assert_eq!(AnimeDetail::default().batch_download_url(), None);
    }

    #[test]
    fn detail_prefers_english_title() {
        let detail = AnimeDetail {
            title: "Sousou no Frieren".to_string(),
            english: Some("Frieren: Beyond Journey's End".to_string()),
            ..AnimeDetail::default()
        };
        assert_eq!(detail.display_title(), "Frieren: Beyond Journey's End");

        let fallback = AnimeDetail {
            title: "Sousou no Frieren".to_string(),
            english: Some("  ".to_string()),
            ..AnimeDetail::default()
        };
        assert_eq!(fallback.display_title(), "Sousou no Frieren");
    }
}
