//! Share menu for anime pages: the platform share sheet when the browser has
//! one, otherwise a dropdown with a copy-link button and social links.

use crate::components::{AppView, Icon};
use crate::utils::delay_ms;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// One social network entry in the share menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareTarget {
    pub name: &'static str,
    pub hover: &'static str,
    pub url: String,
}

/// What happened to a native share request.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    Shared,
    /// The user closed the share sheet.
    Cancelled,
    Unsupported,
    Failed(String),
}

impl ShareOutcome {
    /// The dropdown is the fallback for anything but a finished or dismissed sheet.
    pub fn opens_menu(&self) -> bool {
        matches!(self, Self::Unsupported | Self::Failed(_))
    }
}

pub fn share_url(origin: &str, slug: &str) -> String {
    let route = AppView::AnimeDetailView { slug: slug.to_string() };
    format!("{}{route}", origin.trim_end_matches('/'))
}

pub fn share_text(title: &str) -> String {
    format!("Check out \"{title}\" - Watch now!")
}

pub fn share_targets(url: &str, text: &str) -> Vec<ShareTarget> {
    let url_param = urlencoding::encode(url);
    let text_param = urlencoding::encode(text);
    let combined = urlencoding::encode(&format!("{text} {url}")).into_owned();

    vec![
        ShareTarget {
            name: "Facebook",
            hover: "hover:bg-blue-500 hover:text-white",
            url: format!("https://www.facebook.com/sharer/sharer.php?u={url_param}&quote={text_param}"),
        },
        ShareTarget {
            name: "Twitter",
            hover: "hover:bg-sky-500 hover:text-white",
            url: format!("https://twitter.com/intent/tweet?url={url_param}&text={text_param}"),
        },
        ShareTarget {
            name: "WhatsApp",
            hover: "hover:bg-green-500 hover:text-white",
            url: format!("https://wa.me/?text={combined}"),
        },
        ShareTarget {
            name: "Telegram",
            hover: "hover:bg-blue-400 hover:text-white",
            url: format!("https://t.me/share/url?url={url_param}&text={text_param}"),
        },
        ShareTarget {
            name: "Reddit",
            hover: "hover:bg-orange-500 hover:text-white",
            url: format!("https://www.reddit.com/submit?url={url_param}&title={text_param}"),
        },
    ]
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn error_name(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// `navigator[object][method]`, when the browser has it.
#[cfg(target_arch = "wasm32")]
fn navigator_method(object: Option<&str>, method: &str) -> Option<(JsValue, js_sys::Function)> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let target = match object {
        Some(name) => js_sys::Reflect::get(&navigator, &JsValue::from_str(name)).ok()?,
        None => navigator,
    };
    let function = js_sys::Reflect::get(&target, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some((target, function))
}

#[cfg(target_arch = "wasm32")]
async fn call_promise(target: &JsValue, function: &js_sys::Function, arg: &JsValue) -> Result<(), String> {
    let promise = function.call1(target, arg).map_err(|err| error_name(&err))?;
    wasm_bindgen_futures::JsFuture::from(promise.unchecked_into::<js_sys::Promise>())
        .await
        .map(|_| ())
        .map_err(|err| error_name(&err))
}

#[cfg(target_arch = "wasm32")]
async fn native_share(title: &str, text: &str, url: &str) -> ShareOutcome {
    let Some((navigator, share)) = navigator_method(None, "share") else {
        return ShareOutcome::Unsupported;
    };
    let data = js_sys::Object::new();
    for (key, value) in [("title", title), ("text", text), ("url", url)] {
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    match call_promise(&navigator, &share, &data.into()).await {
        Ok(()) => ShareOutcome::Shared,
        Err(name) if name == "AbortError" => ShareOutcome::Cancelled,
        Err(name) => ShareOutcome::Failed(name),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn native_share(_title: &str, _text: &str, _url: &str) -> ShareOutcome {
    ShareOutcome::Unsupported
}

#[cfg(target_arch = "wasm32")]
async fn copy_text(text: &str) -> Result<(), String> {
    let (clipboard, write_text) = navigator_method(Some("clipboard"), "writeText")
        .ok_or_else(|| "clipboard unavailable".to_string())?;
    call_promise(&clipboard, &write_text, &JsValue::from_str(text)).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn copy_text(_text: &str) -> Result<(), String> {
    Err("clipboard unavailable".to_string())
}

#[component]
pub fn ShareButton(title: String, slug: String, #[props(default)] class: String) -> Element {
    let mut menu_open = use_signal(|| false);
    let mut copied = use_signal(|| false);
    let mut copy_failed = use_signal(|| false);

    let url = share_url(&page_origin(), &slug);
    let text = share_text(&title);
    let targets = share_targets(&url, &text);
    let copy_tone = if copied() {
        "bg-green-600 text-white"
    } else {
        "bg-gray-800 hover:bg-gray-700 text-gray-300"
    };

    let on_share = {
        let (title, text, url) = (title.clone(), text.clone(), url.clone());
        move |_: MouseEvent| {
            let (title, text, url) = (title.clone(), text.clone(), url.clone());
            spawn(async move {
                let outcome = native_share(&title, &text, &url).await;
                match &outcome {
                    ShareOutcome::Shared => tracing::info!(%url, "anime shared"),
                    ShareOutcome::Failed(reason) => tracing::warn!(%reason, "share sheet failed"),
                    _ => tracing::debug!(?outcome, "share sheet closed"),
                }
                if outcome.opens_menu() {
                    menu_open.set(true);
                }
            });
        }
    };

    let on_copy = {
        let url = url.clone();
        move |_: MouseEvent| {
            let url = url.clone();
            spawn(async move {
                if let Err(reason) = copy_text(&url).await {
                    tracing::warn!(%reason, "copy link failed");
                    copy_failed.set(true);
                    return;
                }
                copied.set(true);
                delay_ms(1000).await;
                menu_open.set(false);
                delay_ms(1000).await;
                copied.set(false);
            });
        }
    };

    rsx! {
        div { class: "relative inline-block {class}",
            button {
                r#type: "button",
                class: "w-full inline-flex items-center justify-center gap-2 px-4 py-2.5 rounded-lg font-medium bg-gray-800 hover:bg-gray-700 text-white transition-colors",
                aria_label: "Share",
                aria_expanded: "{menu_open()}",
                aria_haspopup: "true",
                onclick: on_share,
                Icon { name: "share".to_string(), class: "w-5 h-5".to_string() }
                span { "Share" }
            }

            if menu_open() {
                div {
                    class: "fixed inset-0 bg-black/50 backdrop-blur-sm z-40",
                    aria_hidden: "true",
                    onclick: move |_| menu_open.set(false),
                }
                div {
                    class: "absolute right-0 mt-2 w-72 bg-gray-900 border border-gray-800 rounded-xl shadow-2xl z-50",
                    role: "menu",
                    div { class: "p-4 border-b border-gray-800",
                        h3 { class: "font-semibold text-white mb-1 truncate", "Share \"{title}\"" }
                        p { class: "text-xs text-gray-400 truncate", "{url}" }
                    }
                    div { class: "p-4 border-b border-gray-800 space-y-2",
                        button {
                            r#type: "button",
                            class: "w-full flex items-center justify-center gap-2 py-2 px-4 rounded-lg font-medium {copy_tone}",
                            disabled: copied(),
                            onclick: on_copy,
                            if copied() {
                                Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                                "Copied!"
                            } else {
                                Icon { name: "link".to_string(), class: "w-4 h-4".to_string() }
                                "Copy Link"
                            }
                        }
                        if copy_failed() {
                            input {
                                class: "w-full bg-gray-800 text-gray-300 text-xs rounded-lg px-3 py-2",
                                readonly: true,
                                value: "{url}",
                            }
                        }
                    }
                    div { class: "p-4",
                        h4 { class: "text-sm font-medium text-gray-400 mb-3", "Share on social media" }
                        div { class: "grid grid-cols-5 gap-2",
                            for target in targets {
                                a {
                                    key: "{target.name}",
                                    href: "{target.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "flex flex-col items-center justify-center p-2 rounded-lg bg-gray-800 text-gray-400 transition-all {target.hover}",
                                    aria_label: "Share on {target.name}",
                                    span { class: "text-[10px]", "{target.name}" }
                                }
                            }
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
    fn share_url_points_at_the_anime_page() {
        assert_eq!(
            share_url("https://animestream.app/", "one-piece"),
            "https://animestream.app/anime/one-piece"
        );
        assert_eq!(share_url("", "one-piece"), "/anime/one-piece");
    }

    #[test]
    fn share_targets_encode_url_and_text() {
        let targets = share_targets("https://site.io/anime/one-piece", "Nonton One Piece");
        let names: Vec<_> = targets.iter().map(|target| target.name).collect();
        assert_eq!(names, ["Facebook", "Twitter", "WhatsApp", "Telegram", "Reddit"]);

        assert_eq!(
            targets[1].url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fsite.io%2Fanime%2Fone-piece&text=Nonton%20One%20Piece"
        );
        assert_eq!(
            targets[2].url,
            "https://wa.me/?text=Nonton%20One%20Piece%20https%3A%2F%2Fsite.io%2Fanime%2Fone-piece"
        );
        assert!(targets[4].url.ends_with("&title=Nonton%20One%20Piece"));
    }

    #[test]
    fn share_text_quotes_the_title() {
        assert_eq!(share_text("Frieren"), "Check out \"Frieren\" - Watch now!");
    }

    #[test]
    fn only_unfinished_shares_fall_back_to_the_menu() {
        assert!(ShareOutcome::Unsupported.opens_menu());
        assert!(ShareOutcome::Failed("NotAllowedError".to_string()).opens_menu());
        assert!(!ShareOutcome::Shared.opens_menu());
        assert!(!ShareOutcome::Cancelled.opens_menu());
    }
}
