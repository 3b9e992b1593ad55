use crate::api::{AnimeClient, AnimeSummary};
use crate::components::{AppView, Icon};
use crate::utils::delay_ms;
use dioxus::prelude::*;

pub const SEARCH_DEBOUNCE_MS: u64 = 300;
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 5;

/// Trimmed query, or `None` when it is too short to search for.
pub fn searchable_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (query.chars().count() >= MIN_QUERY_CHARS).then(|| query.to_string())
}

#[component]
pub fn SearchBar() -> Element {
    let client = use_context::<AnimeClient>();
    let route = use_route::<AppView>();
    let initial_query = match &route {
        AppView::SearchView { q } => q.clone(),
        _ => String::new(),
    };

    let mut query = use_signal(move || initial_query);
    let mut suggestions = use_signal(Vec::<AnimeSummary>::new);
    let mut is_loading = use_signal(|| false);
    let mut focused = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    // Debounce typing, then fetch suggestions; late responses are dropped.
    use_effect(move || {
        let raw = query();
        let next = generation.peek().wrapping_add(1);
        generation.set(next);

        let Some(term) = searchable_query(&raw) else {
            suggestions.set(Vec::new());
            is_loading.set(false);
            return;
        };

        let client = client.clone();
        spawn(async move {
            delay_ms(SEARCH_DEBOUNCE_MS).await;
            if *generation.peek() != next {
                return;
            }
            is_loading.set(true);
            let found = match client.search(&term).await {
                Ok(list) => list,
                Err(err) => {
                    tracing::warn!(error = %err, "search suggestions failed");
                    Vec::new()
                }
            };
            if *generation.peek() != next {
                return;
            }
            suggestions.set(found.into_iter().take(MAX_SUGGESTIONS).collect());
            is_loading.set(false);
        });
    });

    let mut go_to_search = move |term: String| {
        focused.set(false);
        navigator().push(AppView::SearchView { q: term });
    };

    let show_dropdown = focused() && searchable_query(&query()).is_some();

    rsx! {
        form {
            class: "relative w-full",
            role: "search",
            onsubmit: move |evt| {
                evt.prevent_default();
                let term = query().trim().to_string();
                if !term.is_empty() {
                    go_to_search(term);
                }
            },
            Icon {
                name: "search".to_string(),
                class: "absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-500 pointer-events-none".to_string(),
            }
            input {
                class: "w-full pl-10 pr-9 py-2 bg-gray-900/80 border border-gray-700/60 rounded-xl text-sm text-white placeholder:text-gray-500 focus:outline-none focus:border-red-500/50 focus:ring-2 focus:ring-red-500/20",
                r#type: "search",
                placeholder: "Cari anime...",
                aria_label: "Search anime",
                value: query,
                oninput: move |evt| query.set(evt.value()),
                onfocus: move |_| focused.set(true),
                onblur: move |_| {
                    // Leave time for a click on a suggestion to land.
                    spawn(async move {
                        delay_ms(150).await;
                        focused.set(false);
                    });
                },
            }
            if !query().is_empty() {
                button {
                    r#type: "button",
                    class: "absolute right-2 top-1/2 -translate-y-1/2 p-1 text-gray-500 hover:text-white",
                    aria_label: "Clear search",
                    onclick: move |_| query.set(String::new()),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }

            if show_dropdown {
                div { class: "absolute top-full mt-2 inset-x-0 z-50 rounded-xl border border-gray-800 bg-gray-900/95 shadow-2xl overflow-hidden",
                    if is_loading() {
                        div { class: "flex items-center gap-2 p-3 text-sm text-gray-400",
                            Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                            "Mencari..."
                        }
                    } else if suggestions().is_empty() {
                        p { class: "p-3 text-sm text-gray-500", "Tidak ada saran" }
                    } else {
                        for anime in suggestions() {
                            SuggestionItem {
                                key: "{anime.anime_id}",
                                anime: anime.clone(),
                                onselect: move |title: String| {
                                    query.set(title.clone());
                                    go_to_search(title);
                                },
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "w-full p-3 text-left text-sm text-red-400 hover:bg-gray-800 border-t border-gray-800",
                            "Lihat semua hasil untuk \"{query}\""
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionItem(anime: AnimeSummary, onselect: EventHandler<String>) -> Element {
    let title = anime.display_title();
    let score = anime.score_label();

    rsx! {
        button {
            r#type: "button",
            class: "flex items-center gap-3 p-3 w-full text-left hover:bg-gray-800 transition-colors",
            onclick: {
                let title = title.clone();
                move |_| onselect.call(title.clone())
            },
            div { class: "flex-shrink-0 w-10 h-14 bg-gray-800 rounded overflow-hidden",
                if let Some(poster) = anime.poster.clone() {
                    img {
                        src: "{poster}",
                        alt: "{title}",
                        class: "w-full h-full object-cover",
                        loading: "lazy",
                    }
                }
            }
            div { class: "flex-1 min-w-0",
                p { class: "text-sm font-medium text-white truncate", "{title}" }
                div { class: "flex items-center gap-3 mt-1 text-xs",
                    if let Some(kind) = anime.kind.clone() {
                        span { class: "text-gray-400", "{kind}" }
                    }
                    if let Some(score) = score {
                        span { class: "flex items-center gap-1 text-yellow-500",
                            Icon { name: "star".to_string(), class: "w-3 h-3".to_string() }
                            "{score}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_need_two_characters() {
        assert_eq!(searchable_query(""), None);
        assert_eq!(searchable_query("  a "), None);
        assert_eq!(searchable_query(" naruto "), Some("naruto".to_string()));
        assert_eq!(searchable_query("進撃"), Some("進撃".to_string()));
    }
}
