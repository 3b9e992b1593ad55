//! Shared layout pieces, the route table and the video player UI.

mod anime_card;
mod app;
mod app_view;
mod footer;
mod icons;
mod loading;
mod navbar;
mod pagination;
mod search_bar;
mod share_button;
pub mod video_player;
pub mod views;

pub use anime_card::*;
pub use app::*;
pub use app_view::*;
pub use footer::*;
pub use icons::*;
pub use loading::*;
pub use navbar::*;
pub use pagination::*;
pub use search_bar::*;
pub use share_button::*;
// Views are accessed via views::ViewName
