use crate::api::{AnimeClient, AnimePage, ApiError};
use crate::components::{
    AnimeGrid, CardGridSkeleton, EmptyState, ListingRoute, PageHeader, Pagination,
};
use crate::config::AppConfig;
use crate::utils::title_from_slug;
use dioxus::prelude::*;

impl ListingRoute {
    fn heading(&self) -> (String, String) {
        match self {
            Self::Trending => (
                "Anime Trending".to_string(),
                "Anime paling banyak ditonton saat ini".to_string(),
            ),
            Self::Ongoing => (
                "Anime Ongoing".to_string(),
                "Anime yang sedang tayang dan update setiap minggu".to_string(),
            ),
            Self::Completed => (
                "Anime Completed".to_string(),
                "Anime yang sudah tamat, tonton dari awal sampai akhir".to_string(),
            ),
            Self::Genre(slug) => {
                let name = title_from_slug(slug);
                (
                    format!("Genre {name}"),
                    format!("Kumpulan anime dengan genre {name}"),
                )
            }
        }
    }

    async fn fetch(&self, client: &AnimeClient, page: u32) -> Result<AnimePage, ApiError> {
        match self {
            Self::Trending => client.get_trending(page).await,
            Self::Ongoing => client.get_ongoing(page).await,
            Self::Completed => client.get_completed(page).await,
            Self::Genre(slug) => client.get_genre(slug, page).await,
        }
    }
}

#[component]
pub fn TrendingView(page: u32) -> Element {
    rsx! { CatalogListing { route: ListingRoute::Trending, page } }
}

#[component]
pub fn OngoingView(page: u32) -> Element {
    rsx! { CatalogListing { route: ListingRoute::Ongoing, page } }
}

#[component]
pub fn CompletedView(page: u32) -> Element {
    rsx! { CatalogListing { route: ListingRoute::Completed, page } }
}

#[component]
pub fn GenreView(slug: String, page: u32) -> Element {
    rsx! { CatalogListing { route: ListingRoute::Genre(slug), page } }
}

/// Paged grid shared by every listing route. A missing `?page` arrives as 0.
#[component]
fn CatalogListing(route: ListingRoute, page: u32) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let page = page.max(1);
    let (title, subtitle) = route.heading();
    let page_title = if page > 1 {
        config.page_title(&format!("{title} - Halaman {page}"))
    } else {
        config.page_title(&title)
    };

    let listing = use_resource(use_reactive!(|route, page| {
        let client = client.clone();
        async move {
            let started = crate::diagnostics::now_ms();
            let result = route.fetch(&client, page).await;
            crate::diagnostics::log_perf("catalog.fetch", started, &format!("page={page}"));
            result
        }
    }));

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-8",
            PageHeader { title, subtitle: Some(subtitle) }

            {match listing() {
                None => rsx! { CardGridSkeleton {} },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, ?route, page, "listing unavailable");
                    rsx! {
                        EmptyState {
                            icon: "alert",
                            title: "Gagal memuat anime".to_string(),
                            message: Some("Data sedang tidak dapat diakses. Silakan coba lagi nanti.".to_string()),
                        }
                    }
                }
                Some(Ok(result)) if result.anime_list.is_empty() => rsx! {
                    EmptyState {
                        icon: "film",
                        title: "Belum ada anime".to_string(),
                        message: Some(format!("Tidak ada anime di halaman {page}.")),
                    }
                },
                Some(Ok(result)) => rsx! {
                    AnimeGrid { anime: result.anime_list.clone() }
                    if let Some(info) = result.pagination.clone() {
                        Pagination { info, route: route.clone() }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_heading_uses_readable_name() {
        let (title, subtitle) = ListingRoute::Genre("slice-of-life".to_string()).heading();
        assert_eq!(title, "Genre Slice Of Life");
        assert!(subtitle.ends_with("Slice Of Life"));
    }

    #[test]
    fn fixed_listings_have_distinct_titles() {
        let titles: Vec<String> = [
            ListingRoute::Trending,
            ListingRoute::Ongoing,
            ListingRoute::Completed,
        ]
        .iter()
        .map(|route| route.heading().0)
        .collect();
        assert_eq!(titles, ["Anime Trending", "Anime Ongoing", "Anime Completed"]);
    }
}
