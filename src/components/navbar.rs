use crate::components::{AppView, Icon, SearchBar};
use crate::config::AppConfig;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Home,
    Trending,
    Ongoing,
    Completed,
    Genre,
    Schedule,
}

impl Section {
    const ALL: [Section; 6] = [
        Section::Home,
        Section::Trending,
        Section::Ongoing,
        Section::Completed,
        Section::Genre,
        Section::Schedule,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Trending => "Trending",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Genre => "Genre",
            Self::Schedule => "Jadwal",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Trending => "flame",
            Self::Ongoing => "tv",
            Self::Completed => "check-circle",
            Self::Genre => "tag",
            Self::Schedule => "calendar",
        }
    }

    fn route(self) -> AppView {
        match self {
            Self::Home => AppView::HomeView {},
            Self::Trending => AppView::TrendingView { page: 1 },
            Self::Ongoing => AppView::OngoingView { page: 1 },
            Self::Completed => AppView::CompletedView { page: 1 },
            Self::Genre => AppView::GenresView {},
            Self::Schedule => AppView::ScheduleView {},
        }
    }

    fn of(view: &AppView) -> Option<Self> {
        match view {
            AppView::HomeView {} => Some(Self::Home),
            AppView::TrendingView { .. } => Some(Self::Trending),
            AppView::OngoingView { .. } => Some(Self::Ongoing),
            AppView::CompletedView { .. } => Some(Self::Completed),
            AppView::GenresView {} | AppView::GenreView { .. } => Some(Self::Genre),
            AppView::ScheduleView {} => Some(Self::Schedule),
            _ => None,
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<AppConfig>();
    let view = use_route::<AppView>();
    let mut menu_open = use_signal(|| false);
    let active = Section::of(&view);
    let initial = config
        .site_name
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        nav { class: "bg-gray-950/90 border-b border-gray-800/60 backdrop-blur-xl",
            div { class: "max-w-7xl mx-auto px-4 h-16 flex items-center gap-4",
                Link {
                    to: AppView::HomeView {},
                    class: "flex items-center gap-2 shrink-0",
                    div { class: "w-9 h-9 rounded-lg bg-gradient-to-br from-red-500 to-red-700 flex items-center justify-center font-bold shadow-lg shadow-red-500/20",
                        "{initial}"
                    }
                    span { class: "hidden sm:inline text-lg font-bold", "{config.site_name}" }
                }

                div { class: "hidden lg:flex items-center gap-1",
                    for section in Section::ALL {
                        NavItem {
                            key: "{section.label()}",
                            section,
                            active: active == Some(section),
                            onnavigate: move |_| menu_open.set(false),
                        }
                    }
                }

                div { class: "flex-1 max-w-md ml-auto", SearchBar {} }

                button {
                    class: "lg:hidden p-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800/60 transition-colors",
                    aria_label: if menu_open() { "Close menu" } else { "Open menu" },
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    Icon {
                        name: if menu_open() { "x".to_string() } else { "menu".to_string() },
                        class: "w-5 h-5".to_string(),
                    }
                }
            }

            if menu_open() {
                div { class: "lg:hidden border-t border-gray-800/60 px-4 py-3 grid grid-cols-2 gap-1",
                    for section in Section::ALL {
                        NavItem {
                            key: "{section.label()}",
                            section,
                            active: active == Some(section),
                            onnavigate: move |_| menu_open.set(false),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(section: Section, active: bool, onnavigate: EventHandler<()>) -> Element {
    let base_class = "flex items-center gap-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors";
    let active_class = if active {
        "bg-red-600/20 text-red-400"
    } else {
        "text-gray-400 hover:text-white hover:bg-gray-800/60"
    };

    rsx! {
        Link {
            to: section.route(),
            class: "{base_class} {active_class}",
            onclick: move |_| onnavigate.call(()),
            Icon { name: section.icon().to_string(), class: "w-4 h-4".to_string() }
            span { "{section.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_detail_highlights_genre_section() {
        let view = AppView::GenreView {
            slug: "action".to_string(),
            page: 2,
        };
        assert_eq!(Section::of(&view), Some(Section::Genre));
        assert_eq!(Section::of(&AppView::SearchView { q: "x".to_string() }), None);
    }

    #[test]
    fn every_section_routes_to_its_own_page() {
        for section in Section::ALL {
            assert_eq!(Section::of(&section.route()), Some(section));
        }
    }
}
