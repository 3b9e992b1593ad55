use super::PlayerAction;
use crate::components::Icon;
use crate::player::{PlaybackSession, ServerCatalog};
use crate::utils::format_time;
use dioxus::prelude::*;

pub const PLAYBACK_RATES: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

pub fn rate_label(rate: f64) -> String {
    if (rate - 1.0).abs() < f64::EPSILON {
        "Normal".to_string()
    } else {
        format!("{rate}x")
    }
}

#[component]
pub fn PlayerControls(
    session: PlaybackSession,
    visible: bool,
    on_action: EventHandler<PlayerAction>,
) -> Element {
    let mut settings_open = use_signal(|| false);

    let progress = session.progress_percent();
    let seek_max = session.duration.max(0.0);
    let volume_percent = session.volume * 100.0;
    let time_label = format!(
        "{} / {}",
        format_time(session.position),
        format_time(session.duration)
    );
    let play_icon = if session.is_playing() { "pause" } else { "play" };
    let volume_icon = if session.muted { "volume-x" } else { "volume" };
    let fullscreen_icon = if session.fullscreen { "minimize" } else { "maximize" };
    let wrapper_class = if visible {
        "absolute bottom-0 inset-x-0 px-4 pb-3 pt-10 bg-gradient-to-t from-black/90 to-transparent transition-opacity duration-300 opacity-100"
    } else {
        "absolute bottom-0 inset-x-0 px-4 pb-3 pt-10 bg-gradient-to-t from-black/90 to-transparent transition-opacity duration-300 opacity-0 pointer-events-none"
    };
    let current_rate = session.playback_rate;

    rsx! {
        div { class: "{wrapper_class}",
            input {
                r#type: "range",
                class: "player-range w-full mb-3",
                style: "--fill: {progress}%",
                aria_label: "Seek",
                min: "0",
                max: "{seek_max}",
                step: "0.1",
                value: "{session.position}",
                disabled: seek_max <= 0.0,
                oninput: move |evt| {
                    if let Ok(seconds) = evt.value().parse::<f64>() {
                        on_action.call(PlayerAction::Seek(seconds));
                    }
                },
            }

            div { class: "flex items-center justify-between gap-3",
                div { class: "flex items-center gap-3",
                    button {
                        class: "player-button",
                        aria_label: if session.is_playing() { "Pause" } else { "Play" },
                        onclick: move |_| on_action.call(PlayerAction::TogglePlay),
                        Icon { name: play_icon.to_string(), class: "w-5 h-5".to_string() }
                    }

                    div { class: "group flex items-center gap-2",
                        button {
                            class: "player-button",
                            aria_label: if session.muted { "Unmute" } else { "Mute" },
                            onclick: move |_| on_action.call(PlayerAction::ToggleMute),
                            Icon { name: volume_icon.to_string(), class: "w-5 h-5".to_string() }
                        }
                        input {
                            r#type: "range",
                            class: "player-range w-20 sm:w-24",
                            style: "--fill: {volume_percent}%",
                            aria_label: "Volume",
                            min: "0",
                            max: "1",
                            step: "0.05",
                            value: "{session.volume}",
                            oninput: move |evt| {
                                if let Ok(volume) = evt.value().parse::<f64>() {
                                    on_action.call(PlayerAction::SetVolume(volume));
                                }
                            },
                        }
                    }

                    span { class: "text-xs sm:text-sm text-gray-200 tabular-nums", "{time_label}" }
                }

                div { class: "relative flex items-center gap-2",
                    button {
                        class: "player-button",
                        aria_label: "Settings",
                        onclick: move |_| {
                            let open = settings_open();
                            settings_open.set(!open);
                        },
                        Icon { name: "settings".to_string(), class: "w-5 h-5".to_string() }
                    }

                    if settings_open() {
                        div { class: "absolute bottom-12 right-10 w-40 rounded-lg bg-gray-900/95 border border-gray-700 shadow-xl py-2 z-20",
                            p { class: "px-3 pb-1 text-xs uppercase tracking-wider text-gray-500", "Speed" }
                            for rate in PLAYBACK_RATES {
                                button {
                                    key: "{rate}",
                                    class: if (rate - current_rate).abs() < f64::EPSILON {
                                        "w-full text-left px-3 py-1.5 text-sm text-red-400 bg-white/5"
                                    } else {
                                        "w-full text-left px-3 py-1.5 text-sm text-gray-200 hover:bg-white/10"
                                    },
                                    onclick: move |_| {
                                        on_action.call(PlayerAction::SetRate(rate));
                                        settings_open.set(false);
                                    },
                                    "{rate_label(rate)}"
                                }
                            }
                        }
                    }

                    button {
                        class: "player-button",
                        aria_label: if session.fullscreen { "Exit fullscreen" } else { "Fullscreen" },
                        onclick: move |_| on_action.call(PlayerAction::ToggleFullscreen),
                        Icon { name: fullscreen_icon.to_string(), class: "w-5 h-5".to_string() }
                    }
                }
            }
        }
    }
}

/// Quality tiers and their servers. Every button is disabled while a
/// switch is outstanding.
#[component]
pub fn ServerSelector(
    catalog: ServerCatalog,
    active_server: Option<String>,
    pending_server: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    if catalog.is_empty() {
        return rsx! {
            p { class: "text-sm text-gray-500", "No alternative servers for this episode." }
        };
    }

    let switching = pending_server.is_some();

    rsx! {
        div { class: "rounded-xl bg-gray-900/60 border border-gray-800 p-4 space-y-3",
            div { class: "flex items-center gap-2 text-sm font-semibold text-white",
                Icon { name: "server".to_string(), class: "w-4 h-4 text-red-500".to_string() }
                "Servers"
                if switching {
                    span { class: "ml-2 inline-flex items-center gap-1 text-xs font-normal text-gray-400",
                        Icon { name: "loader".to_string(), class: "w-3 h-3".to_string() }
                        "Switching..."
                    }
                }
            }
            for tier in catalog.tiers().iter().filter(|tier| !tier.server_list.is_empty()) {
                div { key: "{tier.title}", class: "flex flex-wrap items-center gap-2",
                    span { class: "w-14 text-xs font-medium text-gray-400", "{tier.title}" }
                    for server in tier.server_list.iter() {
                        {
                            let server_id = server.server_id.clone();
                            let is_active = active_server.as_deref() == Some(server.server_id.as_str());
                            let is_pending = pending_server.as_deref() == Some(server.server_id.as_str());
                            let class = if is_active {
                                "px-3 py-1.5 rounded-md text-xs font-medium bg-red-600 text-white"
                            } else if is_pending {
                                "px-3 py-1.5 rounded-md text-xs font-medium bg-gray-700 text-white animate-pulse"
                            } else {
                                "px-3 py-1.5 rounded-md text-xs font-medium bg-gray-800 text-gray-300 hover:bg-gray-700 hover:text-white disabled:opacity-50 disabled:cursor-not-allowed"
                            };
                            rsx! {
                                button {
                                    key: "{server.server_id}",
                                    class: "{class}",
                                    disabled: switching,
                                    aria_pressed: is_active,
                                    onclick: move |_| on_select.call(server_id.clone()),
                                    "{server.title}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ShortcutHints() -> Element {
    let hints = [
        ("Space / K", "Play / pause"),
        ("← →", "Seek 10s"),
        ("↑ ↓", "Volume"),
        ("M", "Mute"),
        ("F", "Fullscreen"),
        ("< >", "Speed"),
    ];

    rsx! {
        div { class: "hidden md:flex flex-wrap gap-x-4 gap-y-1 text-xs text-gray-500",
            for (keys, action) in hints {
                span { key: "{keys}",
                    kbd { class: "px-1.5 py-0.5 rounded bg-gray-800 text-gray-300 font-mono", "{keys}" }
                    " {action}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_labels() {
        assert_eq!(rate_label(1.0), "Normal");
        assert_eq!(rate_label(0.5), "0.5x");
        assert_eq!(rate_label(1.25), "1.25x");
        assert_eq!(rate_label(2.0), "2x");
    }

    #[test]
    fn rate_menu_stays_within_limits() {
        use crate::player::{MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE};
        assert_eq!(PLAYBACK_RATES.first(), Some(&MIN_PLAYBACK_RATE));
        assert_eq!(PLAYBACK_RATES.last(), Some(&MAX_PLAYBACK_RATE));
    }
}
