//! Page components, one per route.

mod anime_detail;
mod catalog;
mod episode;
mod genres;
mod home;
mod not_found;
mod schedule;
mod search;

pub use anime_detail::AnimeDetailView;
pub use catalog::{CompletedView, GenreView, OngoingView, TrendingView};
pub use episode::EpisodeView;
pub use genres::GenresView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use schedule::ScheduleView;
pub use search::SearchView;
