use crate::components::AppView;
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer(site_name: String) -> Element {
    let year = chrono::Local::now().year();
    let anime_links = [
        ("Trending", AppView::TrendingView { page: 1 }),
        ("Ongoing", AppView::OngoingView { page: 1 }),
        ("Completed", AppView::CompletedView { page: 1 }),
        ("Jadwal Rilis", AppView::ScheduleView {}),
    ];
    let browse_links = [
        ("Semua Genre", AppView::GenresView {}),
        ("Action", AppView::GenreView { slug: "action".to_string(), page: 1 }),
        ("Romance", AppView::GenreView { slug: "romance".to_string(), page: 1 }),
        ("Pencarian", AppView::SearchView { q: String::new() }),
    ];

    rsx! {
        footer { class: "relative z-10 mt-16 border-t border-gray-800/60 bg-gray-950/80",
            div { class: "max-w-7xl mx-auto px-4 py-10 grid gap-8 sm:grid-cols-3",
                div {
                    h2 { class: "text-lg font-bold text-white mb-2", "{site_name}" }
                    p { class: "text-sm text-gray-400 leading-relaxed",
                        "Nonton anime terbaru dan terpopuler dengan subtitle Indonesia."
                    }
                }
                FooterColumn { title: "Anime", links: anime_links.to_vec() }
                FooterColumn { title: "Jelajahi", links: browse_links.to_vec() }
            }
            div { class: "border-t border-gray-800/60 py-4 text-center text-xs text-gray-500",
                "© {year} {site_name}. Konten disediakan oleh API pihak ketiga."
            }
        }
    }
}

#[component]
fn FooterColumn(title: &'static str, links: Vec<(&'static str, AppView)>) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold uppercase tracking-wider text-gray-300 mb-3", "{title}" }
            ul { class: "space-y-2",
                for (label, to) in links {
                    li { key: "{label}",
                        Link { to, class: "text-sm text-gray-400 hover:text-white transition-colors", "{label}" }
                    }
                }
            }
        }
    }
}
