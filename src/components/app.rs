use crate::api::AnimeClient;
use crate::components::{view_label, AppView, Footer, Navbar};
use crate::config::AppConfig;
use dioxus::prelude::*;

/// Layout shared by every page. Owns the config and API client contexts.
#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(AppConfig::default);
    use_context_provider(|| AnimeClient::new(config.clone()));

    let route = use_route::<AppView>();

    // New pages start at the top.
    use_effect(use_reactive!(|route| {
        tracing::debug!(view = view_label(&route), path = %route, "navigated");
        #[cfg(target_arch = "wasm32")]
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }));

    rsx! {
        div { class: "app-container flex flex-col min-h-screen text-white",
            header { class: "sticky top-0 z-50", Navbar {} }

            main { id: "main-content", class: "flex-1 relative z-10",
                div { class: "page-shell",
                    Outlet::<AppView> {}
                }
            }

            Footer { site_name: config.site_name.clone() }
        }
    }
}
