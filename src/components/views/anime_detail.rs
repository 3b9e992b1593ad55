use crate::api::{AnimeClient, AnimeDetail, EpisodeRef};
use crate::components::{AppView, EmptyState, Icon, LoadingSpinner, ShareButton};
use crate::config::AppConfig;
use crate::utils::title_from_slug;
use dioxus::prelude::*;

/// Label/value pairs for the info panel, skipping blank fields.
fn detail_rows(anime: &AnimeDetail) -> Vec<(&'static str, String)> {
    let episodes = anime.episodes.map(|count| count.to_string());
    [
        ("Judul Jepang", anime.japanese.clone()),
        ("Tipe", anime.kind.clone()),
        ("Status", anime.status.clone()),
        ("Episode", episodes),
        ("Durasi", anime.duration.clone()),
        ("Tayang", anime.aired.clone()),
        ("Studio", anime.studios.clone()),
        ("Produser", anime.producers.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        let value = value?.trim().to_string();
        (!value.is_empty()).then_some((label, value))
    })
    .collect()
}

#[component]
pub fn AnimeDetailView(slug: String) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let fallback_title = config.page_title(&title_from_slug(&slug));

    let detail = use_resource(use_reactive!(|slug| {
        let client = client.clone();
        async move { client.get_anime(&slug).await }
    }));

    let missing_title = config.page_title("Anime Tidak Ditemukan");

    match detail() {
        None => rsx! {
            document::Title { "{fallback_title}" }
            LoadingSpinner { label: "Memuat detail anime...".to_string() }
        },
        Some(Err(err)) if err.is_not_found() => rsx! {
            document::Title { "{missing_title}" }
            EmptyState {
                icon: "film",
                title: "Anime Tidak Ditemukan".to_string(),
                message: Some("Halaman anime tidak ditemukan atau telah dihapus.".to_string()),
            }
        },
        Some(Err(err)) => {
            tracing::warn!(error = %err, %slug, "anime detail unavailable");
            rsx! {
                document::Title { "{fallback_title}" }
                EmptyState {
                    icon: "alert",
                    title: "Gagal memuat anime".to_string(),
                    message: Some("Data sedang tidak dapat diakses. Silakan coba lagi nanti.".to_string()),
                }
            }
        }
        Some(Ok(anime)) => rsx! {
            AnimeDetailBody { slug, anime, fallback_title }
        },
    }
}

#[component]
fn AnimeDetailBody(slug: String, anime: AnimeDetail, fallback_title: String) -> Element {
    let config = use_context::<AppConfig>();
    let title = anime.display_title();
    let page_title = if title.is_empty() { fallback_title } else { config.page_title(&title) };
    let description = anime
        .short_description()
        .unwrap_or_else(|| format!("Nonton {title} dengan kualitas terbaik"));
    let score = anime.score.as_ref().and_then(|score| score.label());
    let rows = detail_rows(&anime);
    let newest = anime.episode_list.first().cloned();
    let oldest = anime.episode_list.last().cloned();
    let episode_count = anime.episode_list.len();
    let batch_url = anime.batch_download_url().map(str::to_string);

    rsx! {
        document::Title { "{page_title}" }
        document::Meta { name: "description", content: "{description}" }

        nav { class: "mb-8", aria_label: "Breadcrumb",
            ol { class: "flex items-center gap-2 text-sm",
                li {
                    Link { to: AppView::HomeView {}, class: "text-gray-400 hover:text-white", "Beranda" }
                }
                li { class: "text-gray-600", "/" }
                li { class: "text-red-500 font-medium truncate", aria_current: "page", "{title}" }
            }
        }

        div { class: "lg:grid lg:grid-cols-3 lg:gap-8",
            aside { class: "lg:col-span-1 mb-8 lg:mb-0",
                div { class: "lg:sticky lg:top-24 space-y-6",
                    div { class: "relative rounded-xl overflow-hidden shadow-2xl bg-gray-900 aspect-[2/3]",
                        if let Some(poster) = anime.poster.clone() {
                            img {
                                src: "{poster}",
                                alt: "Poster {title}",
                                class: "w-full h-full object-cover",
                            }
                        }
                        if let Some(score) = score {
                            div { class: "absolute top-4 right-4 bg-black/80 text-white px-3 py-1.5 rounded-full flex items-center gap-1",
                                Icon { name: "star".to_string(), class: "w-4 h-4 text-yellow-400".to_string() }
                                span { class: "font-bold", "{score}" }
                            }
                        }
                    }

                    if let Some(first) = oldest.clone() {
                        Link {
                            to: AppView::EpisodeView { slug: first.episode_id.clone() },
                            class: "w-full flex items-center justify-center gap-2 py-3 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-xl transition-colors",
                            Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                            "Tonton dari Awal"
                        }
                    }
                    if episode_count > 1 {
                        if let Some(latest) = newest {
                            Link {
                                to: AppView::EpisodeView { slug: latest.episode_id.clone() },
                                class: "w-full flex items-center justify-center gap-2 py-3 bg-gray-800 hover:bg-gray-700 text-white font-medium rounded-xl transition-colors",
                                "Episode Terbaru"
                            }
                        }
                    }

                    if let Some(batch_url) = batch_url {
                        a {
                            href: "{batch_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "w-full flex items-center justify-center gap-2 py-3 bg-gradient-to-r from-red-600 to-pink-600 hover:from-red-700 hover:to-pink-700 text-white font-semibold rounded-xl transition-colors",
                            Icon { name: "download".to_string(), class: "w-5 h-5".to_string() }
                            "Download Batch"
                        }
                    }
                    ShareButton { title: title.clone(), slug: slug.clone(), class: "w-full".to_string() }

                    if !rows.is_empty() {
                        dl { class: "bg-gray-900/50 rounded-xl p-4 space-y-3 text-sm",
                            for (label, value) in rows {
                                div { key: "{label}", class: "flex flex-col sm:flex-row gap-1 sm:gap-2",
                                    dt { class: "font-medium text-gray-300 min-w-[110px]", "{label}" }
                                    dd { class: "text-gray-400 flex-1", "{value}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "lg:col-span-2 space-y-8",
                header {
                    h1 { class: "text-3xl md:text-4xl font-bold text-white", "{title}" }
                    if let Some(japanese) = anime.japanese.clone() {
                        p { class: "mt-2 text-gray-400", "{japanese}" }
                    }
                }

                if !anime.genre_list.is_empty() {
                    div { class: "flex flex-wrap gap-2",
                        for genre in anime.genre_list.clone() {
                            Link {
                                key: "{genre.genre_id}",
                                to: AppView::GenreView { slug: genre.genre_id.clone(), page: 1 },
                                class: "bg-gray-800 hover:bg-gray-700 text-gray-300 text-xs font-medium px-3 py-1.5 rounded-full transition-colors",
                                "{genre.title}"
                            }
                        }
                    }
                }

                section { class: "space-y-3",
                    h2 { class: "text-xl font-bold text-white", "Sinopsis" }
                    if anime.synopsis.paragraphs.is_empty() {
                        p { class: "text-gray-500", "Sinopsis belum tersedia." }
                    } else {
                        for (index, paragraph) in anime.synopsis.paragraphs.iter().enumerate() {
                            p { key: "{index}", class: "text-gray-300 leading-relaxed", "{paragraph}" }
                        }
                    }
                }

                section { class: "space-y-4",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-xl font-bold text-white", "Daftar Episode" }
                        span { class: "text-sm text-gray-500", "{episode_count} episode" }
                    }
                    if anime.episode_list.is_empty() {
                        p { class: "text-gray-500", "Belum ada episode yang tersedia." }
                    } else {
                        div { class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                            for episode in anime.episode_list.clone() {
                                EpisodeCard { key: "{episode.episode_id}", episode }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EpisodeCard(episode: EpisodeRef) -> Element {
    rsx! {
        Link {
            to: AppView::EpisodeView { slug: episode.episode_id.clone() },
            class: "group flex items-center justify-between gap-3 p-4 rounded-xl border border-gray-800 bg-gray-900/50 hover:border-red-500/40 transition-colors",
            div { class: "min-w-0",
                span { class: "text-xs text-gray-500 font-medium", "Episode" }
                h3 { class: "text-white font-semibold truncate", "{episode.title}" }
                if let Some(date) = episode.date.clone() {
                    p { class: "text-xs text-gray-500 mt-1", "{date}" }
                }
            }
            Icon {
                name: "chevron-right".to_string(),
                class: "w-5 h-5 text-gray-500 group-hover:text-red-500".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_rows_skip_blank_fields() {
        let anime = AnimeDetail {
            japanese: Some("ワンピース".to_string()),
            status: Some("   ".to_string()),
            episodes: Some(1100),
            studios: Some("Toei Animation".to_string()),
            ..Default::default()
        };
        let rows = detail_rows(&anime);
        assert_eq!(
            rows,
            vec![
                ("Judul Jepang", "ワンピース".to_string()),
                ("Episode", "1100".to_string()),
                ("Studio", "Toei Animation".to_string()),
            ]
        );
    }
}
