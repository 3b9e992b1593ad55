//! Browser side of the player: the `<video>` element behind [`MediaElement`]
//! and document listeners that unregister themselves when dropped.

#[cfg(target_arch = "wasm32")]
use crate::player::KeyInput;
use crate::player::{MediaElement, MediaError};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, HtmlVideoElement, KeyboardEvent};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// DOM ids for one mounted player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDomIds {
    pub container: String,
    pub video: String,
}

impl PlayerDomIds {
    pub fn allocate() -> Self {
        let id = NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            container: format!("anime-player-{id}"),
            video: format!("anime-player-{id}-video"),
        }
    }
}

/// Called with the rejection reason when a play promise fails.
pub type RejectionHandler = Rc<dyn Fn(String)>;

#[cfg(target_arch = "wasm32")]
pub struct WebMedia {
    video: HtmlVideoElement,
    container: Option<HtmlElement>,
    on_play_rejected: RejectionHandler,
}

#[cfg(target_arch = "wasm32")]
impl WebMedia {
    pub fn find(ids: &PlayerDomIds, on_play_rejected: RejectionHandler) -> Option<Self> {
        let document = window()?.document()?;
        let video = document
            .get_element_by_id(&ids.video)?
            .dyn_into::<HtmlVideoElement>()
            .ok()?;
        let container = document
            .get_element_by_id(&ids.container)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        Some(Self {
            video,
            container,
            on_play_rejected,
        })
    }

    pub fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.video.duration()
    }

    pub fn error_detail(&self) -> Option<String> {
        let error = self.video.error()?;
        let label = match error.code() {
            1 => "MEDIA_ERR_ABORTED",
            2 => "MEDIA_ERR_NETWORK",
            3 => "MEDIA_ERR_DECODE",
            4 => "MEDIA_ERR_SRC_NOT_SUPPORTED",
            _ => "MEDIA_ERR_UNKNOWN",
        };
        let message = error.message();
        if message.is_empty() {
            Some(label.to_string())
        } else {
            Some(format!("{label}: {message}"))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error_name(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(target_arch = "wasm32")]
impl MediaElement for WebMedia {
    fn play(&self) -> Result<(), MediaError> {
        let promise = self
            .video
            .play()
            .map_err(|err| MediaError::PlayRejected(js_error_name(&err)))?;
        let on_rejected = self.on_play_rejected.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                let name = js_error_name(&err);
                // A pause or source change interrupted the request.
                if name != "AbortError" {
                    on_rejected(name);
                }
            }
        });
        Ok(())
    }

    fn pause(&self) {
        let _ = self.video.pause();
    }

    fn seek(&self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn set_volume(&self, volume: f64) {
        self.video.set_volume(volume);
        self.video.set_muted(volume == 0.0);
    }

    fn set_playback_rate(&self, rate: f64) {
        self.video.set_playback_rate(rate);
    }

    fn load(&self, url: &str) {
        self.video.set_src(url);
        self.video.load();
    }

    fn request_fullscreen(&self) -> Result<(), MediaError> {
        let target = self
            .container
            .as_ref()
            .ok_or(MediaError::Unavailable)?;
        target
            .request_fullscreen()
            .map_err(|err| MediaError::Fullscreen(js_error_name(&err)))
    }

    fn exit_fullscreen(&self) -> Result<(), MediaError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(MediaError::Unavailable)?;
        document.exit_fullscreen();
        Ok(())
    }
}

/// Native builds have no media element; commands are dropped.
#[cfg(not(target_arch = "wasm32"))]
pub struct WebMedia;

#[cfg(not(target_arch = "wasm32"))]
impl WebMedia {
    pub fn find(_ids: &PlayerDomIds, _on_play_rejected: RejectionHandler) -> Option<Self> {
        Some(Self)
    }

    pub fn current_time(&self) -> f64 {
        0.0
    }

    pub fn duration(&self) -> f64 {
        0.0
    }

    pub fn error_detail(&self) -> Option<String> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaElement for WebMedia {
    fn play(&self) -> Result<(), MediaError> {
        Err(MediaError::Unavailable)
    }

    fn pause(&self) {}

    fn seek(&self, _seconds: f64) {}

    fn set_volume(&self, _volume: f64) {}

    fn set_playback_rate(&self, _rate: f64) {}

    fn load(&self, _url: &str) {}

    fn request_fullscreen(&self) -> Result<(), MediaError> {
        Err(MediaError::Unavailable)
    }

    fn exit_fullscreen(&self) -> Result<(), MediaError> {
        Err(MediaError::Unavailable)
    }
}

/// A document listener that is removed when this guard is dropped.
#[cfg(target_arch = "wasm32")]
pub struct EventSubscription {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl EventSubscription {
    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = window()?.document()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct EventSubscription;

/// True when focus is inside something the user types into.
#[cfg(target_arch = "wasm32")]
fn is_editable_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if matches!(tag.as_str(), "input" | "textarea" | "select") {
            return true;
        }
        if let Some(value) = element.get_attribute("contenteditable") {
            if !value.eq_ignore_ascii_case("false") {
                return true;
            }
        }
        current = element.parent_element();
    }
    false
}

/// Run `f` with the keydown event translated for the shortcut table. Events
/// something else already handled are skipped.
#[cfg(target_arch = "wasm32")]
pub fn with_key_input<R>(event: &web_sys::Event, f: impl FnOnce(&KeyInput<'_>) -> R) -> Option<R> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    if event.default_prevented() {
        return None;
    }
    let key = event.key();
    let input = KeyInput {
        key: &key,
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        alt: event.alt_key(),
        editable_target: is_editable_target(event),
        composing: event.is_composing(),
    };
    Some(f(&input))
}

#[cfg(target_arch = "wasm32")]
pub fn is_document_fullscreen() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|document| document.fullscreen_element())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_ids_are_unique() {
        let first = PlayerDomIds::allocate();
        let second = PlayerDomIds::allocate();
        assert_ne!(first.container, second.container);
        assert!(first.video.starts_with(&first.container));
    }
}
