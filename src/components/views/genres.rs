use crate::api::AnimeClient;
use crate::components::{AppView, EmptyState, Icon, PageHeader};
use crate::config::AppConfig;
use dioxus::prelude::*;

#[component]
pub fn GenresView() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let page_title = config.page_title("Daftar Genre Anime");

    let genres = use_resource(move || {
        let client = client.clone();
        async move { client.get_genres().await }
    });

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-8",
            PageHeader {
                title: "Daftar Genre".to_string(),
                subtitle: Some("Jelajahi anime berdasarkan genre favoritmu".to_string()),
            }

            {match genres() {
                None => rsx! {
                    div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-3",
                        for index in 0..18 {
                            div { key: "{index}", class: "h-14 rounded-xl bg-gray-900 animate-pulse" }
                        }
                    }
                },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "genre list unavailable");
                    rsx! {
                        EmptyState {
                            icon: "alert",
                            title: "Gagal memuat genre".to_string(),
                            message: Some("Silakan coba lagi nanti.".to_string()),
                        }
                    }
                }
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { icon: "tag", title: "Belum ada genre".to_string() }
                },
                Some(Ok(list)) => {
                    let mut list = list;
                    list.sort_by_key(|genre| genre.title.to_lowercase());
                    rsx! {
                        p { class: "text-sm text-gray-500", "{list.len()} genre tersedia" }
                        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-3",
                            for genre in list {
                                Link {
                                    key: "{genre.genre_id}",
                                    to: AppView::GenreView { slug: genre.genre_id.clone(), page: 1 },
                                    class: "group flex items-center gap-2 px-4 py-3 rounded-xl border border-gray-800 bg-gray-900/60 hover:border-red-500/40 hover:bg-gray-800/60 transition-colors",
                                    Icon { name: "tag".to_string(), class: "w-4 h-4 text-red-400".to_string() }
                                    span { class: "text-sm font-medium text-gray-200 group-hover:text-white truncate",
                                        "{genre.title}"
                                    }
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}
