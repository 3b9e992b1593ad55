use crate::components::{AppView, Icon};
use crate::config::AppConfig;
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let config = use_context::<AppConfig>();
    let page_title = config.page_title("Halaman Tidak Ditemukan");
    let path = format!("/{}", segments.join("/"));
    tracing::info!(%path, "unknown route");

    rsx! {
        document::Title { "{page_title}" }

        div { class: "flex flex-col items-center justify-center text-center py-20 gap-6",
            p { class: "text-8xl md:text-9xl font-black bg-gradient-to-r from-red-500 to-pink-500 bg-clip-text text-transparent",
                "404"
            }
            h1 { class: "text-3xl font-bold text-white", "Halaman Tidak Ditemukan" }
            p { class: "text-gray-400 max-w-md",
                "Halaman "
                code { class: "text-red-400", "{path}" }
                " tidak ada atau sudah dipindahkan."
            }
            div { class: "flex flex-col sm:flex-row gap-3",
                Link {
                    to: AppView::HomeView {},
                    class: "inline-flex items-center gap-2 px-6 py-3 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-xl transition-colors",
                    Icon { name: "home".to_string(), class: "w-5 h-5".to_string() }
                    "Kembali ke Beranda"
                }
                Link {
                    to: AppView::SearchView { q: String::new() },
                    class: "inline-flex items-center gap-2 px-6 py-3 bg-gray-800 hover:bg-gray-700 text-white font-semibold rounded-xl transition-colors",
                    Icon { name: "search".to_string(), class: "w-5 h-5".to_string() }
                    "Cari Anime"
                }
            }
        }
    }
}
