use dioxus::prelude::*;

/// Stroke icons used across the site and the player controls.
/// Unknown names render a plain circle.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let body = match name.as_str() {
        "home" => rsx! {
            path { d: "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            path { d: "M9 22V12h6v10" }
        },
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "M21 21l-4.35-4.35" }
        },
        "flame" => rsx! {
            path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14-.22-4.05 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
        },
        "tv" => rsx! {
            rect { x: "2", y: "7", width: "20", height: "15", rx: "2" }
            path { d: "M17 2l-5 5-5-5" }
        },
        "check-circle" => rsx! {
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            path { d: "M22 4L12 14.01l-3-3" }
        },
        "tag" => rsx! {
            path { d: "M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z" }
            path { d: "M7 7h.01" }
        },
        "calendar" => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M16 2v4M8 2v4M3 10h18" }
        },
        "film" => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "2.18" }
            path { d: "M7 2v20M17 2v20M2 12h20M2 7h5M2 17h5M17 17h5M17 7h5" }
        },
        "star" => rsx! {
            path {
                d: "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
                fill: "currentColor",
            }
        },
        "play" => rsx! {
            path { d: "M5 3l14 9-14 9z", fill: "currentColor" }
        },
        "pause" => rsx! {
            path { d: "M6 4h4v16H6zM14 4h4v16h-4z", fill: "currentColor" }
        },
        "volume" => rsx! {
            path { d: "M11 5L6 9H2v6h4l5 4z" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        "volume-x" => rsx! {
            path { d: "M11 5L6 9H2v6h4l5 4z" }
            path { d: "M23 9l-6 6M17 9l6 6" }
        },
        "settings" => rsx! {
            circle { cx: "12", cy: "12", r: "3" }
            path { d: "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 7.18 19.8l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.17 14H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.2 7.18l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 10 3.17V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.83 10H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z" }
        },
        "maximize" => rsx! {
            path { d: "M8 3H5a2 2 0 0 0-2 2v3M21 8V5a2 2 0 0 0-2-2h-3M3 16v3a2 2 0 0 0 2 2h3M16 21h3a2 2 0 0 0 2-2v-3" }
        },
        "minimize" => rsx! {
            path { d: "M8 3v3a2 2 0 0 1-2 2H3M21 8h-3a2 2 0 0 1-2-2V3M3 16h3a2 2 0 0 1 2 2v3M16 21v-3a2 2 0 0 1 2-2h3" }
        },
        "server" => rsx! {
            rect { x: "2", y: "2", width: "20", height: "8", rx: "2" }
            rect { x: "2", y: "14", width: "20", height: "8", rx: "2" }
            path { d: "M6 6h.01M6 18h.01" }
        },
        "chevron-left" => rsx! {
            path { d: "M15 18l-6-6 6-6" }
        },
        "chevron-right" => rsx! {
            path { d: "M9 18l6-6-6-6" }
        },
        "chevrons-left" => rsx! {
            path { d: "M11 17l-5-5 5-5M18 17l-5-5 5-5" }
        },
        "chevrons-right" => rsx! {
            path { d: "M13 17l5-5-5-5M6 17l5-5-5-5" }
        },
        "alert" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 8v4M12 16h.01" }
        },
        "menu" => rsx! {
            path { d: "M3 6h18M3 12h18M3 18h18" }
        },
        "x" => rsx! {
            path { d: "M18 6L6 18M6 6l12 12" }
        },
        "share" => rsx! {
            circle { cx: "18", cy: "5", r: "3" }
            circle { cx: "6", cy: "12", r: "3" }
            circle { cx: "18", cy: "19", r: "3" }
            path { d: "M8.59 13.51l6.83 3.98M15.41 6.51l-6.82 3.98" }
        },
        "download" => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "M7 10l5 5 5-5M12 15V3" }
        },
        "link" => rsx! {
            path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
            path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
        },
        "check" => rsx! {
            path { d: "M20 6L9 17l-5-5" }
        },
        "clock" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 6v6l4 2" }
        },
        "loader" => {
            return rsx! {
                svg {
                    class: "{class} animate-spin",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
                    path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
                }
            };
        }
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}
