use crate::api::AnimeSummary;
use crate::components::{AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn AnimeCard(anime: AnimeSummary, #[props(default = true)] show_episodes: bool) -> Element {
    let mut image_failed = use_signal(|| false);
    let title = anime.display_title();
    let score = anime.score_label();
    let tone = anime.status_tone();
    let poster = anime.poster.clone().filter(|url| !url.trim().is_empty());

    rsx! {
        Link {
            to: AppView::AnimeDetailView { slug: anime.anime_id.clone() },
            class: "group block relative overflow-hidden rounded-xl transition-all duration-300 hover:scale-[1.02] hover:shadow-2xl",
            div { class: "relative bg-gray-900 border border-gray-800 rounded-xl overflow-hidden h-full",
                div { class: "relative aspect-[2/3] overflow-hidden",
                    {match (poster, image_failed()) {
                        (Some(src), false) => rsx! {
                            img {
                                src: "{src}",
                                alt: "Poster {title}",
                                class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
                                loading: "lazy",
                                onerror: move |_| image_failed.set(true),
                            }
                        },
                        _ => rsx! {
                            div { class: "w-full h-full bg-gradient-to-br from-gray-800 to-gray-900 flex flex-col items-center justify-center gap-2 text-gray-600",
                                Icon { name: "film".to_string(), class: "w-10 h-10".to_string() }
                                span { class: "text-xs text-gray-500", "Gagal memuat gambar" }
                            }
                        },
                    }}

                    div { class: "absolute inset-0 bg-gradient-to-t from-gray-900 via-gray-900/40 to-transparent opacity-80" }

                    div { class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-black/40",
                        div { class: "bg-red-600 text-white rounded-full p-4",
                            Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                        }
                    }

                    div { class: "absolute top-3 left-3 right-3 flex justify-between items-start",
                        div { class: "flex flex-col gap-2",
                            if let Some(rank) = anime.rank {
                                span { class: "badge bg-red-600 text-white", "#{rank}" }
                            }
                            if let Some(kind) = anime.kind.clone() {
                                span { class: "badge bg-gray-800 text-gray-300", "{kind}" }
                            }
                        }
                        if let Some(score) = score {
                            span { class: "badge bg-black/70 text-yellow-400 gap-1",
                                Icon { name: "star".to_string(), class: "w-3 h-3".to_string() }
                                "{score}"
                            }
                        }
                    }

                    div { class: "absolute bottom-3 left-3 right-3 flex flex-wrap gap-2",
                        if let Some(status) = anime.status.clone() {
                            span { class: "badge {tone.badge_class()}", "{status}" }
                        }
                        if show_episodes {
                            if let Some(episodes) = anime.episodes {
                                span { class: "badge bg-gray-800/90 text-gray-200", "{episodes} Eps" }
                            }
                        }
                    }
                }

                div { class: "p-3",
                    h3 { class: "text-sm font-semibold text-white line-clamp-2 group-hover:text-red-400 transition-colors",
                        "{title}"
                    }
                    if let Some(released) = anime.released_on.clone() {
                        p { class: "mt-1 text-xs text-gray-500 flex items-center gap-1",
                            Icon { name: "clock".to_string(), class: "w-3 h-3".to_string() }
                            "{released}"
                        }
                    }
                }
            }
        }
    }
}

/// Responsive grid of cards.
#[component]
pub fn AnimeGrid(anime: Vec<AnimeSummary>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 xl:grid-cols-6 gap-4",
            for item in anime {
                AnimeCard { key: "{item.anime_id}", anime: item.clone() }
            }
        }
    }
}
