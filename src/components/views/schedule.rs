use crate::api::{AnimeClient, ScheduleDay, ScheduleEntry};
use crate::components::{AppView, EmptyState, Icon, LoadingSpinner, PageHeader};
use crate::config::AppConfig;
use crate::utils::schedule_day_name;
use chrono::Datelike;
use dioxus::prelude::*;

fn is_today(day: &ScheduleDay, today: &str) -> bool {
    day.day.trim().eq_ignore_ascii_case(today)
}

#[component]
pub fn ScheduleView() -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let page_title = config.page_title("Jadwal Rilis Anime");
    let today = schedule_day_name(chrono::Local::now().weekday());

    let schedule = use_resource(move || {
        let client = client.clone();
        async move { client.get_schedule().await }
    });

    rsx! {
        document::Title { "{page_title}" }

        div { class: "space-y-8",
            PageHeader {
                title: "Jadwal Rilis".to_string(),
                subtitle: Some("Pantau episode baru dari anime favoritmu berdasarkan hari tayang".to_string()),
            }

            div { class: "inline-flex items-center gap-2 px-4 py-2 rounded-full bg-red-600/15 text-red-400 text-sm font-medium",
                Icon { name: "calendar".to_string(), class: "w-4 h-4".to_string() }
                "Hari ini: {today}"
            }

            {match schedule() {
                None => rsx! { LoadingSpinner { label: "Memuat jadwal...".to_string() } },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "schedule unavailable");
                    rsx! {
                        EmptyState {
                            icon: "alert",
                            title: "Jadwal tidak tersedia".to_string(),
                            message: Some("Silakan coba lagi nanti.".to_string()),
                        }
                    }
                }
                Some(Ok(days)) if days.is_empty() => rsx! {
                    EmptyState { icon: "calendar", title: "Belum ada jadwal".to_string() }
                },
                Some(Ok(days)) => rsx! {
                    div { class: "space-y-6",
                        for day in days {
                            DaySchedule {
                                key: "{day.day}",
                                is_today: is_today(&day, today),
                                day: day.clone(),
                            }
                        }
                    }
                },
            }}

            p { class: "text-xs text-gray-500",
                "Jadwal berdasarkan hari tayang di Jepang. Waktu rilis bisa berbeda tergantung zona waktu."
            }
        }
    }
}

#[component]
fn DaySchedule(day: ScheduleDay, is_today: bool) -> Element {
    let frame = if is_today {
        "rounded-2xl border border-red-500/50 bg-red-950/20 p-5 shadow-lg shadow-red-500/10"
    } else {
        "rounded-2xl border border-gray-800 bg-gray-900/50 p-5"
    };
    let count = day.anime_list.len();

    rsx! {
        section { class: "{frame}",
            div { class: "flex items-center justify-between mb-4",
                h2 { class: "text-xl font-bold text-white flex items-center gap-2",
                    "{day.day}"
                    if is_today {
                        span { class: "badge bg-red-600 text-white", "Hari Ini" }
                    }
                }
                span { class: "text-sm text-gray-500", "{count} anime" }
            }
            if day.anime_list.is_empty() {
                p { class: "text-sm text-gray-500", "Tidak ada anime yang tayang." }
            } else {
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-3",
                    for entry in day.anime_list {
                        ScheduleItem { key: "{entry.anime_id}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleItem(entry: ScheduleEntry) -> Element {
    rsx! {
        Link {
            to: AppView::AnimeDetailView { slug: entry.anime_id.clone() },
            class: "group flex items-center gap-3 p-2 rounded-xl hover:bg-gray-800/60 transition-colors",
            div { class: "flex-shrink-0 w-12 h-16 rounded-lg overflow-hidden bg-gray-800",
                if let Some(poster) = entry.poster.clone() {
                    img {
                        src: "{poster}",
                        alt: "{entry.title}",
                        class: "w-full h-full object-cover",
                        loading: "lazy",
                    }
                }
            }
            span { class: "text-sm font-medium text-gray-200 group-hover:text-red-400 line-clamp-2",
                "{entry.title}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_matches_day_name_loosely() {
        let day = ScheduleDay {
            day: " senin ".to_string(),
            anime_list: Vec::new(),
        };
        assert!(is_today(&day, "Senin"));
        assert!(!is_today(&day, "Selasa"));
    }
}
