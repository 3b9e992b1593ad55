use crate::api::{AnimeClient, AnimeSection, AnimeSummary};
use crate::components::{AnimeCard, AppView, CardGridSkeleton, EmptyState, Icon};
use crate::config::AppConfig;
use dioxus::prelude::*;

const RECENT_LIMIT: usize = 12;
const MOVIE_LIMIT: usize = 12;

fn section_list(section: &Option<AnimeSection>, limit: usize) -> Vec<AnimeSummary> {
    section
        .as_ref()
        .map(|section| section.anime_list.iter().take(limit).cloned().collect())
        .unwrap_or_default()
}

#[component]
pub fn HomeView() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let page_title = config.page_title("Stream Anime Gratis");

    let home = use_resource(move || {
        let client = client.clone();
        async move { client.get_home().await }
    });

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-12",
            {match home() {
                None => rsx! {
                    div { class: "h-64 rounded-2xl bg-gray-900 animate-pulse" }
                    CardGridSkeleton {}
                },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "home data unavailable");
                    rsx! {
                        EmptyState {
                            icon: "alert",
                            title: "Data Tidak Tersedia".to_string(),
                            message: Some("Maaf, data anime sedang tidak dapat diakses. Silakan coba lagi nanti.".to_string()),
                        }
                    }
                }
                Some(Ok(data)) => {
                    let recent = section_list(&data.recent, RECENT_LIMIT);
                    let top = section_list(&data.top10, 10);
                    let movies = section_list(&data.movie, MOVIE_LIMIT);
                    let total = data.total_anime.unwrap_or(0);
                    let recent_count = recent.len();
                    let top_count = top.len();
                    let movie_count = movies.len();

                    rsx! {
                        if let Some(spotlight) = recent.first().cloned() {
                            Hero { anime: spotlight, total_anime: total }
                        }

                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                            StatTile { label: "Total Anime", value: total.to_string() }
                            StatTile { label: "Rilisan Terbaru", value: recent_count.to_string() }
                            StatTile { label: "Top Populer", value: top_count.to_string() }
                            StatTile { label: "Movie", value: movie_count.to_string() }
                        }

                        HomeSection {
                            title: "Rilisan Terbaru",
                            subtitle: "Episode terbaru yang baru saja rilis",
                            anime: recent,
                            view_all: Some(AppView::OngoingView { page: 1 }),
                            empty_message: "Belum ada anime terbaru yang dirilis",
                        }
                        HomeSection {
                            title: "Top 10 Populer",
                            subtitle: "Anime paling populer minggu ini",
                            anime: top,
                            view_all: Some(AppView::TrendingView { page: 1 }),
                            empty_message: "Belum ada data anime populer",
                        }
                        HomeSection {
                            title: "Rekomendasi Movie",
                            subtitle: "Film anime terbaik untuk ditonton",
                            anime: movies,
                            view_all: Some(AppView::GenreView { slug: "movie".to_string(), page: 1 }),
                            empty_message: "Belum ada rekomendasi movie",
                        }
                    }
                }
            }}

            section { class: "grid gap-4 md:grid-cols-3",
                Collection {
                    title: "Anime Musim Ini",
                    description: "Temukan anime yang sedang tayang musim ini",
                    icon: "tv",
                    to: AppView::OngoingView { page: 1 },
                }
                Collection {
                    title: "Sudah Tamat",
                    description: "Tonton anime lengkap dari awal sampai akhir",
                    icon: "check-circle",
                    to: AppView::CompletedView { page: 1 },
                }
                Collection {
                    title: "By Genre",
                    description: "Jelajahi anime berdasarkan genre favorit",
                    icon: "tag",
                    to: AppView::GenresView {},
                }
            }

            section { class: "rounded-2xl border border-gray-800 bg-gradient-to-r from-gray-900/60 to-black/60 p-8 md:p-12 text-center",
                h2 { class: "text-3xl md:text-4xl font-bold text-white mb-4", "Mulai Streaming Sekarang" }
                p { class: "text-gray-400 text-lg mb-8 max-w-2xl mx-auto",
                    "Koleksi anime terlengkap dengan subtitle Indonesia, selalu update."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    Link {
                        to: AppView::TrendingView { page: 1 },
                        class: "px-8 py-3 bg-gradient-to-r from-red-600 to-pink-600 text-white font-bold rounded-xl transition-transform hover:scale-105",
                        "Lihat Trending"
                    }
                    Link {
                        to: AppView::ScheduleView {},
                        class: "px-8 py-3 bg-gray-900/50 border border-gray-800 text-white font-bold rounded-xl hover:bg-gray-800/70 transition-colors",
                        "Cek Jadwal"
                    }
                }
            }
        }
    }
}

#[component]
fn Hero(anime: AnimeSummary, total_anime: u32) -> Element {
    let title = anime.display_title();

    rsx! {
        section { class: "relative overflow-hidden rounded-2xl border border-gray-800 bg-gray-900",
            if let Some(poster) = anime.poster.clone() {
                img {
                    src: "{poster}",
                    alt: "{title}",
                    class: "absolute inset-0 w-full h-full object-cover opacity-30 blur-sm scale-110",
                }
            }
            div { class: "relative z-10 p-8 md:p-12 max-w-2xl space-y-4",
                span { class: "badge bg-red-600/20 text-red-400", "Baru Rilis" }
                h1 { class: "text-3xl md:text-5xl font-bold text-white", "{title}" }
                if total_anime > 0 {
                    p { class: "text-gray-300", "Lebih dari {total_anime} judul anime siap ditonton." }
                }
                Link {
                    to: AppView::AnimeDetailView { slug: anime.anime_id.clone() },
                    class: "inline-flex items-center gap-2 px-6 py-3 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-xl transition-colors",
                    Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                    "Tonton Sekarang"
                }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "rounded-xl border border-gray-800 bg-gray-900/60 p-4 text-center",
            p { class: "text-2xl font-bold text-white", "{value}" }
            p { class: "text-xs uppercase tracking-wider text-gray-500 mt-1", "{label}" }
        }
    }
}

#[component]
fn HomeSection(
    title: &'static str,
    subtitle: &'static str,
    anime: Vec<AnimeSummary>,
    view_all: Option<AppView>,
    empty_message: &'static str,
) -> Element {
    rsx! {
        section { class: "space-y-6",
            div { class: "flex items-end justify-between gap-4",
                div {
                    h2 { class: "text-2xl font-bold text-white", "{title}" }
                    p { class: "text-sm text-gray-400 mt-1", "{subtitle}" }
                }
                if let Some(to) = view_all {
                    Link {
                        to,
                        class: "flex items-center gap-1 text-sm text-red-400 hover:text-red-300",
                        "Lihat semua"
                        Icon { name: "chevron-right".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
            if anime.is_empty() {
                p { class: "py-8 text-center text-gray-500", "{empty_message}" }
            } else {
                div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4",
                    for item in anime {
                        AnimeCard { key: "{item.anime_id}", anime: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn Collection(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    to: AppView,
) -> Element {
    rsx! {
        Link {
            to,
            class: "group rounded-2xl border border-gray-800 bg-gray-900/60 p-6 hover:border-red-500/40 transition-colors",
            div { class: "inline-flex p-3 rounded-xl bg-red-500/15 text-red-400 mb-4",
                Icon { name: icon.to_string(), class: "w-6 h-6".to_string() }
            }
            h3 { class: "text-lg font-semibold text-white group-hover:text-red-400 transition-colors", "{title}" }
            p { class: "text-sm text-gray-400 mt-1", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_render_empty() {
        assert!(section_list(&None, 5).is_empty());

        let section = AnimeSection {
            anime_list: (0..20)
                .map(|index| AnimeSummary {
                    anime_id: format!("anime-{index}"),
                    ..Default::default()
                })
                .collect(),
        };
        let list = section_list(&Some(section), RECENT_LIMIT);
        assert_eq!(list.len(), RECENT_LIMIT);
        assert_eq!(list[0].anime_id, "anime-0");
    }
}
