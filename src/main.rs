use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod cache;
mod components;
mod config;
mod diagnostics;
mod player;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    tracing::info!(api = %config::AppConfig::default().api_url, "starting");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#030712" }
        document::Meta {
            name: "description",
            content: "Nonton anime terbaru dan terpopuler dengan subtitle Indonesia.",
        }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
