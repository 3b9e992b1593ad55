use crate::api::{AnimeClient, EpisodeDetail, EpisodeRef};
use crate::components::video_player::VideoPlayer;
use crate::components::{AppView, EmptyState, Icon, LoadingSpinner};
use crate::config::AppConfig;
use crate::utils::title_from_slug;
use dioxus::prelude::*;

fn anime_title_of(episode: &EpisodeDetail) -> String {
    episode
        .anime_title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| title_from_slug(&episode.anime_id))
}

/// A fetched episode only counts while the route still points at it.
fn for_route<T>(fetched: Option<(String, T)>, slug: &str) -> Option<(String, T)> {
    fetched.filter(|(fetched_slug, _)| fetched_slug == slug)
}

#[component]
pub fn EpisodeView(slug: String) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let fallback_title = config.page_title(&title_from_slug(&slug));

    let episode = use_resource(use_reactive!(|slug| {
        let client = client.clone();
        async move {
            let started = crate::diagnostics::now_ms();
            let result = client.get_episode(&slug).await;
            crate::diagnostics::log_perf("episode.fetch", started, &slug);
            (slug, result)
        }
    }));

    match for_route(episode(), &slug) {
        None => rsx! {
            document::Title { "{fallback_title}" }
            div { class: "aspect-video w-full rounded-xl bg-gray-900 animate-pulse" }
            LoadingSpinner { label: "Memuat episode...".to_string() }
        },
        Some((_, Err(err))) => {
            tracing::warn!(error = %err, %slug, "episode unavailable");
            let (title, message) = if err.is_not_found() {
                ("Episode Tidak Ditemukan", "Episode ini tidak ditemukan atau telah dihapus.")
            } else {
                ("Gagal memuat episode", "Data sedang tidak dapat diakses. Silakan coba lagi nanti.")
            };
            rsx! {
                document::Title { "{fallback_title}" }
                EmptyState {
                    icon: "alert",
                    title: title.to_string(),
                    message: Some(message.to_string()),
                }
            }
        }
        Some((episode_id, Ok(detail))) => rsx! {
            EpisodeBody { episode_id, detail }
        },
    }
}

#[component]
fn EpisodeBody(episode_id: String, detail: EpisodeDetail) -> Element {
    let config = use_context::<AppConfig>();
    let anime_title = anime_title_of(&detail);
    let page_title = config.page_title(&format!("{} - {anime_title}", detail.title));

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-6",
            nav { aria_label: "Breadcrumb",
                ol { class: "flex items-center gap-2 text-sm min-w-0",
                    li {
                        Link { to: AppView::HomeView {}, class: "text-gray-400 hover:text-white", "Beranda" }
                    }
                    li { class: "text-gray-600", "/" }
                    li { class: "truncate",
                        Link {
                            to: AppView::AnimeDetailView { slug: detail.anime_id.clone() },
                            class: "text-gray-400 hover:text-white",
                            "{anime_title}"
                        }
                    }
                    li { class: "text-gray-600", "/" }
                    li { class: "text-red-500 font-medium truncate", aria_current: "page", "{detail.title}" }
                }
            }

            VideoPlayer {
                key: "{episode_id}",
                stream_url: detail.default_streaming_url.clone(),
                servers: detail.server.qualities.clone(),
                anime_title: anime_title.clone(),
                episode_title: detail.title.clone(),
                poster: detail.poster.clone(),
            }

            div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-white", "{detail.title}" }
                    if let Some(released) = detail.release_time.clone() {
                        p { class: "mt-1 text-sm text-gray-500 flex items-center gap-1",
                            Icon { name: "clock".to_string(), class: "w-4 h-4".to_string() }
                            "Rilis {released}"
                        }
                    }
                }
                Link {
                    to: AppView::AnimeDetailView { slug: detail.anime_id.clone() },
                    class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-gray-800 hover:bg-gray-700 text-sm text-white transition-colors",
                    Icon { name: "film".to_string(), class: "w-4 h-4".to_string() }
                    "Semua Episode"
                }
            }

            div { class: "grid grid-cols-2 gap-3",
                EpisodeStep { episode: detail.prev_episode.clone(), label: "Sebelumnya", forward: false }
                EpisodeStep { episode: detail.next_episode.clone(), label: "Selanjutnya", forward: true }
            }
        }
    }
}

#[component]
fn EpisodeStep(episode: Option<EpisodeRef>, label: &'static str, forward: bool) -> Element {
    let align = if forward { "justify-end text-right" } else { "justify-start text-left" };
    let icon = if forward { "chevron-right" } else { "chevron-left" };

    match episode.filter(|episode| !episode.episode_id.trim().is_empty()) {
        Some(episode) => rsx! {
            Link {
                to: AppView::EpisodeView { slug: episode.episode_id.clone() },
                class: "flex items-center gap-3 {align} p-4 rounded-xl border border-gray-800 bg-gray-900/50 hover:border-red-500/40 transition-colors",
                if !forward {
                    Icon { name: icon.to_string(), class: "w-5 h-5 text-gray-400".to_string() }
                }
                div { class: "min-w-0",
                    p { class: "text-xs text-gray-500", "{label}" }
                    p { class: "text-sm font-medium text-white truncate", "{episode.title}" }
                }
                if forward {
                    Icon { name: icon.to_string(), class: "w-5 h-5 text-gray-400".to_string() }
                }
            }
        },
        None => rsx! {
            div { class: "flex items-center {align} p-4 rounded-xl border border-gray-800/50 text-gray-600 text-sm",
                "Tidak ada episode {label.to_lowercase()}"
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anime_title_falls_back_to_slug() {
        let mut detail = EpisodeDetail {
            anime_id: "kimetsu-no-yaiba".to_string(),
            anime_title: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(anime_title_of(&detail), "Kimetsu No Yaiba");

        detail.anime_title = Some("Demon Slayer".to_string());
        assert_eq!(anime_title_of(&detail), "Demon Slayer");
    }

    #[test]
    fn previous_episode_is_ignored_after_navigation() {
        let fetched = Some(("ep-1".to_string(), "https://cdn/ep1.mp4"));
        assert_eq!(for_route(fetched.clone(), "ep-2"), None);
        assert_eq!(for_route(fetched.clone(), "ep-1"), fetched);
        assert_eq!(for_route::<&str>(None, "ep-1"), None);
    }
}
