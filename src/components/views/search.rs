use crate::api::AnimeClient;
use crate::components::{
    searchable_query, AnimeGrid, CardGridSkeleton, EmptyState, PageHeader, MIN_QUERY_CHARS,
};
use crate::config::AppConfig;
use dioxus::prelude::*;

#[component]
pub fn SearchView(q: String) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let term = searchable_query(&q);
    let page_title = match &term {
        Some(term) => config.page_title(&format!("Hasil pencarian \"{term}\"")),
        None => config.page_title("Pencarian"),
    };

    let results = use_resource(use_reactive!(|term| {
        let client = client.clone();
        async move {
            match term {
                Some(term) => client.search(&term).await.map(Some),
                None => Ok(None),
            }
        }
    }));

    let Some(term) = term else {
        return rsx! {
            document::Title { "{page_title}" }
            EmptyState {
                icon: "search",
                title: "Cari anime".to_string(),
                message: Some(format!("Masukkan minimal {MIN_QUERY_CHARS} karakter untuk mulai mencari.")),
            }
        };
    };

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-8",
            PageHeader {
                title: format!("Hasil pencarian \"{term}\""),
                subtitle: None,
            }

            {match results() {
                None | Some(Ok(None)) => rsx! { CardGridSkeleton {} },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, query = %term, "search failed");
                    rsx! {
                        EmptyState {
                            icon: "alert",
                            title: "Pencarian gagal".to_string(),
                            message: Some("Silakan coba lagi nanti.".to_string()),
                        }
                    }
                }
                Some(Ok(Some(found))) if found.is_empty() => rsx! {
                    EmptyState {
                        icon: "search",
                        title: "Tidak ditemukan".to_string(),
                        message: Some(format!("Tidak ada anime yang cocok dengan \"{term}\".")),
                    }
                },
                Some(Ok(Some(found))) => rsx! {
                    p { class: "text-sm text-gray-400", "Ditemukan {found.len()} anime" }
                    AnimeGrid { anime: found.clone() }
                },
            }}
        }
    }
}
