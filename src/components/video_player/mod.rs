use crate::api::{AnimeClient, ServerTier};
use crate::components::Icon;
use crate::config::AppConfig;
use crate::player::*;
use crate::utils::delay_ms;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};

mod controls;
mod web_media;

pub use controls::*;
pub use web_media::*;

/// Everything the on-screen controls and shortcuts can ask for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    TogglePlay,
    Seek(f64),
    SetVolume(f64),
    ToggleMute,
    SetRate(f64),
    ToggleFullscreen,
    Retry,
    Key(KeyCommand),
}

impl PlayerAction {
    pub fn apply(self, controller: &mut PlaybackController, media: &impl MediaElement) {
        match self {
            Self::TogglePlay => controller.toggle_play(media),
            Self::Seek(seconds) => controller.seek(seconds, media),
            Self::SetVolume(volume) => controller.set_volume(volume, media),
            Self::ToggleMute => controller.toggle_mute(media),
            Self::SetRate(rate) => controller.set_playback_rate(rate, media),
            Self::ToggleFullscreen => controller.toggle_fullscreen(media),
            Self::Retry => controller.retry(media),
            Self::Key(command) => controller.apply_key(command, media),
        }
    }
}

/// Episode video player. Remount it (e.g. with a `key`) to start a new
/// session for another episode.
#[component]
pub fn VideoPlayer(
    stream_url: String,
    servers: Vec<ServerTier>,
    anime_title: String,
    episode_title: String,
    poster: Option<String>,
) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<AnimeClient>();
    let ids = use_hook(PlayerDomIds::allocate);

    let mut controller = use_signal({
        let stream_url = stream_url.clone();
        let autoplay = config.autoplay;
        move || PlaybackController::new(stream_url, ServerCatalog::new(servers), autoplay)
    });

    let on_play_rejected: RejectionHandler = use_hook(|| {
        #[cfg(target_arch = "wasm32")]
        let runtime = Runtime::current();
        Rc::new(move |reason: String| {
            #[cfg(target_arch = "wasm32")]
            let _guard = RuntimeGuard::new(runtime.clone());
            let mut controller = controller;
            match controller.try_write() {
                Ok(mut controller) => controller.on_play_rejected(&reason),
                Err(_) => tracing::debug!(%reason, "player dropped before play was refused"),
            };
        }) as RejectionHandler
    });

    let media_handle = use_callback({
        let ids = ids.clone();
        move |()| WebMedia::find(&ids, on_play_rejected.clone())
    });

    let dispatch = use_callback(move |action: PlayerAction| match media_handle.call(()) {
        Some(media) => action.apply(&mut controller.write(), &media),
        None => tracing::debug!(?action, "player action before the video element mounted"),
    });

    let settle_ms = config.switch_settle_ms;
    let switch_server = use_callback(move |server_id: String| {
        let Some(ticket) = controller.write().begin_switch(&server_id) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.resolve_server(&ticket.server_id).await;
            let Some(media) = media_handle.call(()) else {
                controller.write().detach();
                return;
            };
            let outcome = controller.write().finish_switch(&ticket, result, &media);
            if let SwitchOutcome::Switched { resume_token } = outcome {
                delay_ms(settle_ms).await;
                if let Some(media) = media_handle.call(()) {
                    controller.write().resume_after_switch(resume_token, &media);
                }
            }
        });
    });

    let mut controls_visible = use_signal(|| true);
    let mut hide_generation = use_signal(|| 0u64);
    let hide_ms = config.controls_hide_ms;
    let reveal_controls = use_callback(move |()| {
        controls_visible.set(true);
        let generation = hide_generation.peek().wrapping_add(1);
        hide_generation.set(generation);
        spawn(async move {
            delay_ms(hide_ms).await;
            if *hide_generation.peek() == generation && controller.peek().session().is_playing() {
                controls_visible.set(false);
            }
        });
    });

    let subscriptions = use_hook(|| Rc::new(RefCell::new(Vec::<EventSubscription>::new())));

    #[cfg(target_arch = "wasm32")]
    use_effect({
        let subscriptions = subscriptions.clone();
        move || {
            let mut active = subscriptions.borrow_mut();
            if !active.is_empty() {
                return;
            }
            let runtime = Runtime::current();

            let key_runtime = runtime.clone();
            if let Some(subscription) = EventSubscription::on_document("keydown", move |event| {
                let _guard = RuntimeGuard::new(key_runtime.clone());
                if let Some(command) = with_key_input(&event, command_for_key).flatten() {
                    event.prevent_default();
                    dispatch.call(PlayerAction::Key(command));
                    reveal_controls.call(());
                }
            }) {
                active.push(subscription);
            }

            if let Some(subscription) =
                EventSubscription::on_document("fullscreenchange", move |_| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    controller.write().on_fullscreen_change(is_document_fullscreen());
                })
            {
                active.push(subscription);
            }
        }
    });

    use_drop({
        let subscriptions = subscriptions.clone();
        move || {
            subscriptions.borrow_mut().clear();
            if let Ok(mut controller) = controller.try_write() {
                controller.detach();
            }
        }
    });

    let session = controller.read().session().clone();
    let catalog = controller.read().catalog().clone();
    let show_controls = controls_visible() || !session.is_playing();
    let initial_src = Some(stream_url.trim().to_string()).filter(|url| !url.is_empty());
    let waiting_label = if session.is_loading() {
        Some("Loading video...")
    } else if session.buffering {
        Some("Buffering...")
    } else {
        None
    };
    let show_big_play =
        !session.is_playing() && waiting_label.is_none() && session.error.is_none();
    let container_class = if show_controls {
        "player-shell relative w-full aspect-video bg-black rounded-xl overflow-hidden"
    } else {
        "player-shell relative w-full aspect-video bg-black rounded-xl overflow-hidden cursor-none"
    };

    rsx! {
        div { class: "space-y-4",
            div {
                id: "{ids.container}",
                class: "{container_class}",
                onmousemove: move |_| reveal_controls.call(()),
                onmouseleave: move |_| {
                    if controller.peek().session().is_playing() {
                        controls_visible.set(false);
                    }
                },

                video {
                    id: "{ids.video}",
                    class: "w-full h-full bg-black",
                    src: initial_src,
                    poster: poster.clone().unwrap_or_default(),
                    preload: "metadata",
                    playsinline: true,
                    onclick: move |_| dispatch.call(PlayerAction::TogglePlay),
                    ondoubleclick: move |_| dispatch.call(PlayerAction::ToggleFullscreen),
                    onloadedmetadata: move |_| {
                        if let Some(media) = media_handle.call(()) {
                            let duration = media.duration();
                            controller.write().on_loaded_metadata(duration, &media);
                        }
                    },
                    ontimeupdate: move |_| {
                        if let Some(media) = media_handle.call(()) {
                            controller.write().on_time_update(media.current_time());
                        }
                    },
                    onplay: move |_| {
                        controller.write().on_play();
                        reveal_controls.call(());
                    },
                    onpause: move |_| controller.write().on_pause(),
                    onwaiting: move |_| controller.write().on_waiting(),
                    onplaying: move |_| controller.write().on_playing(),
                    onended: move |_| controller.write().on_ended(),
                    onerror: move |_| {
                        let detail = media_handle.call(()).and_then(|media| media.error_detail());
                        controller.write().on_error(detail.as_deref());
                    },
                }

                if show_controls {
                    div { class: "absolute top-0 inset-x-0 p-4 bg-gradient-to-b from-black/80 to-transparent pointer-events-none",
                        p { class: "text-sm text-gray-300 truncate", "{anime_title}" }
                        h2 { class: "text-lg font-semibold text-white truncate", "{episode_title}" }
                    }
                }

                if let Some(label) = waiting_label {
                    div { class: "absolute inset-0 flex flex-col items-center justify-center gap-3 bg-black/40 pointer-events-none",
                        Icon { name: "loader".to_string(), class: "w-10 h-10 text-red-500".to_string() }
                        p { class: "text-sm text-gray-200", "{label}" }
                    }
                }

                if show_big_play {
                    button {
                        class: "absolute inset-0 m-auto w-20 h-20 rounded-full bg-red-600/90 hover:bg-red-600 text-white flex items-center justify-center shadow-xl transition-transform hover:scale-105",
                        aria_label: "Play",
                        onclick: move |_| dispatch.call(PlayerAction::TogglePlay),
                        Icon { name: "play".to_string(), class: "w-9 h-9 ml-1".to_string() }
                    }
                }

                if let Some(message) = session.error.clone() {
                    div { class: "absolute inset-0 flex flex-col items-center justify-center gap-4 bg-black/80 p-6 text-center",
                        Icon { name: "alert".to_string(), class: "w-12 h-12 text-red-500".to_string() }
                        p { class: "text-white max-w-md", "{message}" }
                        button {
                            class: "px-5 py-2 rounded-lg bg-red-600 hover:bg-red-700 text-white font-medium transition-colors",
                            onclick: move |_| dispatch.call(PlayerAction::Retry),
                            "Try Again"
                        }
                    }
                }

                PlayerControls {
                    session: session.clone(),
                    visible: show_controls,
                    on_action: move |action| dispatch.call(action),
                }
            }

            ServerSelector {
                catalog,
                active_server: session.active_server.clone(),
                pending_server: session.pending_server().map(str::to_string),
                on_select: move |server_id| switch_server.call(server_id),
            }

            ShortcutHints {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ServerEntry;
    use crate::player::media::testing::{MediaCommand, RecordingMedia};

    fn controller() -> PlaybackController {
        let catalog = ServerCatalog::new(vec![ServerTier {
            title: "720p".to_string(),
            server_list: vec![ServerEntry {
                title: "Main".to_string(),
                server_id: "m1".to_string(),
            }],
        }]);
        PlaybackController::new("https://cdn/ep1.mp4", catalog, false)
    }

    #[test]
    fn actions_reach_the_media_element() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.on_loaded_metadata(100.0, &media);

        PlayerAction::Seek(30.0).apply(&mut controller, &media);
        PlayerAction::SetRate(1.4).apply(&mut controller, &media);
        PlayerAction::ToggleMute.apply(&mut controller, &media);
        PlayerAction::Key(KeyCommand::SeekBy(10.0)).apply(&mut controller, &media);

        assert_eq!(
            media.commands(),
            vec![
                MediaCommand::Seek(30.0),
                MediaCommand::Rate(1.5),
                MediaCommand::Volume(0.0),
                MediaCommand::Seek(40.0),
            ]
        );
        assert!(controller.session().muted);
    }

    #[test]
    fn refused_play_after_toggle_reaches_the_overlay() {
        let media = RecordingMedia::default();
        let controller = Rc::new(RefCell::new(controller()));
        controller.borrow_mut().on_loaded_metadata(100.0, &media);
        PlayerAction::TogglePlay.apply(&mut controller.borrow_mut(), &media);

        let on_play_rejected: RejectionHandler = {
            let controller = controller.clone();
            Rc::new(move |reason: String| controller.borrow_mut().on_play_rejected(&reason))
        };
        on_play_rejected("NotAllowedError".to_string());

        let session = controller.borrow().session().clone();
        assert_eq!(session.error.as_deref(), Some(PLAY_FAILED_MESSAGE));
        assert_eq!(session.phase, PlaybackPhase::Paused);
    }

    #[test]
    fn retry_action_reloads_a_failed_source() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.on_error(Some("MEDIA_ERR_DECODE"));

        PlayerAction::Retry.apply(&mut controller, &media);
        assert_eq!(media.commands(), vec![MediaCommand::Load("https://cdn/ep1.mp4".to_string())]);
    }
}
