use crate::components::{AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Memuat...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-3 py-20",
            Icon { name: "loader".to_string(), class: "w-10 h-10 text-red-500".to_string() }
            p { class: "text-sm text-gray-400", "{label}" }
        }
    }
}

/// Placeholder cards shown while a listing loads.
#[component]
pub fn CardGridSkeleton(#[props(default = 12)] count: usize) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 xl:grid-cols-6 gap-4",
            for index in 0..count {
                div { key: "{index}", class: "animate-pulse rounded-xl bg-gray-900 border border-gray-800 overflow-hidden",
                    div { class: "aspect-[2/3] bg-gray-800" }
                    div { class: "p-3 space-y-2",
                        div { class: "h-3 bg-gray-800 rounded w-5/6" }
                        div { class: "h-3 bg-gray-800 rounded w-1/2" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(
    icon: &'static str,
    title: String,
    #[props(default)] message: Option<String>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center text-center gap-3 py-20",
            Icon { name: icon.to_string(), class: "w-16 h-16 text-gray-600".to_string() }
            h2 { class: "text-lg font-semibold text-gray-300", "{title}" }
            if let Some(message) = message {
                p { class: "text-sm text-gray-500 max-w-md", "{message}" }
            }
            div { class: "flex gap-3 mt-2",
                Link {
                    to: AppView::HomeView {},
                    class: "px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg text-sm font-medium transition-colors",
                    "Beranda"
                }
                Link {
                    to: AppView::TrendingView { page: 1 },
                    class: "px-4 py-2 bg-gray-800 hover:bg-gray-700 text-white rounded-lg text-sm font-medium transition-colors",
                    "Trending"
                }
            }
        }
    }
}

#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "mb-8",
            h1 { class: "text-3xl md:text-4xl font-bold text-white", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "mt-2 text-gray-400", "{subtitle}" }
            }
        }
    }
}
