//! Routes of the site.

use crate::components::views::*;
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/trending?:page")]
        TrendingView { page: u32 },
        #[route("/ongoing?:page")]
        OngoingView { page: u32 },
        #[route("/completed?:page")]
        CompletedView { page: u32 },
        #[route("/genre")]
        GenresView {},
        #[route("/genre/:slug?:page")]
        GenreView { slug: String, page: u32 },
        #[route("/jadwal")]
        ScheduleView {},
        #[route("/search?:q")]
        SearchView { q: String },
        #[route("/anime/:slug")]
        AnimeDetailView { slug: String },
        #[route("/episode/:slug")]
        EpisodeView { slug: String },
        #[route("/:..segments")]
        NotFoundView { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Home",
        AppView::TrendingView { .. } => "Trending",
        AppView::OngoingView { .. } => "Ongoing",
        AppView::CompletedView { .. } => "Completed",
        AppView::GenresView {} | AppView::GenreView { .. } => "Genre",
        AppView::ScheduleView {} => "Schedule",
        AppView::SearchView { .. } => "Search",
        AppView::AnimeDetailView { .. } => "Anime",
        AppView::EpisodeView { .. } => "Watch",
        AppView::NotFoundView { .. } => "Not Found",
    }
}

/// Paginated listing pages; builds the route for a given page number.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingRoute {
    Trending,
    Ongoing,
    Completed,
    Genre(String),
}

impl ListingRoute {
    pub fn page(&self, page: u32) -> AppView {
        let page = page.max(1);
        match self {
            Self::Trending => AppView::TrendingView { page },
            Self::Ongoing => AppView::OngoingView { page },
            Self::Completed => AppView::CompletedView { page },
            Self::Genre(slug) => AppView::GenreView {
                slug: slug.clone(),
                page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_routes_render_page_query() {
        assert_eq!(ListingRoute::Trending.page(3).to_string(), "/trending?page=3");
        assert_eq!(
            ListingRoute::Genre("action".to_string()).page(0).to_string(),
            "/genre/action?page=1"
        );
    }

    #[test]
    fn paths_parse_into_views() {
        let view: AppView = "/anime/one-piece".parse().unwrap();
        assert_eq!(
            view,
            AppView::AnimeDetailView {
                slug: "one-piece".to_string()
            }
        );
        assert_eq!(view_label(&view), "Anime");

        let view: AppView = "/jadwal".parse().unwrap();
        assert_eq!(view, AppView::ScheduleView {});
    }
}
