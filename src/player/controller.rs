use crate::api::ApiError;
use crate::player::keyboard::KeyCommand;
use crate::player::media::MediaElement;
use crate::player::session::*;

pub const PLAY_FAILED_MESSAGE: &str = "Cannot play video. Try another server.";
pub const MEDIA_ERROR_MESSAGE: &str = "Failed to load video. Please try another server.";

pub fn switch_failed_message(server_title: &str) -> String {
    format!("Failed to load server \"{server_title}\". Please try another.")
}

/// Result of applying a server-resolution response.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// New source loaded. Pass the token to `resume_after_switch` once the
    /// settle delay has elapsed.
    Switched { resume_token: u64 },
    /// Resolution failed; the previous server and URL are still in place.
    Failed,
    /// The ticket was superseded or the player was torn down.
    Stale,
}

/// Translates user intent and media events into a consistent
/// [`PlaybackSession`]. The controller never owns the media element; each
/// operation that needs it borrows one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    session: PlaybackSession,
    catalog: ServerCatalog,
    autoplay: bool,
    generation: u64,
    /// A play request the user asked for is still awaiting the element.
    /// Only those rejections reach the error overlay.
    user_play_pending: bool,
}

impl PlaybackController {
    /// Select the first server of the first tier; nothing plays until the
    /// metadata arrives (and then only with `autoplay`).
    pub fn new(initial_stream_url: impl Into<String>, catalog: ServerCatalog, autoplay: bool) -> Self {
        let active = catalog.first_server().map(|server| server.server_id.clone());
        Self {
            session: PlaybackSession::new(initial_stream_url, active),
            catalog,
            autoplay,
            generation: 0,
            user_play_pending: false,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn catalog(&self) -> &ServerCatalog {
        &self.catalog
    }

    pub fn toggle_play(&mut self, media: &impl MediaElement) {
        if self.session.is_switching() {
            tracing::debug!("play toggle ignored while a server switch is pending");
            return;
        }

        if self.session.is_playing() {
            media.pause();
            self.user_play_pending = false;
            self.session.phase = PlaybackPhase::Paused;
            return;
        }

        self.user_play_pending = true;
        if let Err(err) = media.play() {
            self.on_play_rejected(&err.to_string());
        }
    }

    /// The media element refused a play request after the fact. Refusals of
    /// automatic plays (autoplay, resume after a switch) are only logged.
    pub fn on_play_rejected(&mut self, reason: &str) {
        if !std::mem::take(&mut self.user_play_pending) {
            tracing::debug!(%reason, "automatic play was refused");
            return;
        }
        tracing::warn!(%reason, "play request failed");
        self.session.error = Some(PLAY_FAILED_MESSAGE.to_string());
        if self.session.phase != PlaybackPhase::Error {
            self.session.phase = PlaybackPhase::Paused;
        }
    }

    pub fn seek(&mut self, target_seconds: f64, media: &impl MediaElement) {
        if !target_seconds.is_finite() {
            return;
        }
        let target = target_seconds.clamp(0.0, self.session.duration.max(0.0));
        media.seek(target);
        self.session.position = target;
    }

    pub fn set_volume(&mut self, volume: f64, media: &impl MediaElement) {
        if !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.session.volume = volume;
        self.session.muted = volume == 0.0;
        if volume > 0.0 {
            self.session.last_audible_volume = Some(volume);
        }
        media.set_volume(volume);
    }

    pub fn toggle_mute(&mut self, media: &impl MediaElement) {
        if self.session.muted {
            let restored = self
                .session
                .last_audible_volume
                .filter(|volume| *volume > 0.0)
                .unwrap_or(DEFAULT_UNMUTE_VOLUME);
            self.session.volume = restored;
            self.session.muted = false;
            media.set_volume(restored);
        } else {
            if self.session.volume > 0.0 {
                self.session.last_audible_volume = Some(self.session.volume);
            }
            self.session.volume = 0.0;
            self.session.muted = true;
            media.set_volume(0.0);
        }
    }

    /// Clamp into `[0.5, 2.0]` and snap to the 0.25 grid.
    pub fn set_playback_rate(&mut self, rate: f64, media: &impl MediaElement) {
        if !rate.is_finite() {
            return;
        }
        let snapped = (rate / PLAYBACK_RATE_STEP).round() * PLAYBACK_RATE_STEP;
        let rate = snapped.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
        self.session.playback_rate = rate;
        media.set_playback_rate(rate);
    }

    pub fn step_playback_rate(&mut self, direction: i8, media: &impl MediaElement) {
        let delta = f64::from(direction.signum()) * PLAYBACK_RATE_STEP;
        self.set_playback_rate(self.session.playback_rate + delta, media);
    }

    /// Only issues the request; `on_fullscreen_change` updates the state.
    pub fn toggle_fullscreen(&self, media: &impl MediaElement) {
        let result = if self.session.fullscreen {
            media.exit_fullscreen()
        } else {
            media.request_fullscreen()
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "fullscreen request not honoured");
        }
    }

    pub fn on_fullscreen_change(&mut self, fullscreen: bool) {
        self.session.fullscreen = fullscreen;
    }

    /// Start a switch to `server_id`. Returns `None` (and issues nothing) when a
    /// switch is already pending or the server is already active.
    pub fn begin_switch(&mut self, server_id: &str) -> Option<SwitchTicket> {
        if self.session.is_switching() {
            tracing::debug!(server_id, "server switch ignored, another one is pending");
            return None;
        }
        if self.session.active_server.as_deref() == Some(server_id) {
            return None;
        }

        let server_title = self
            .catalog
            .find(server_id)
            .map(|server| server.title.clone())
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| server_id.to_string());

        self.generation += 1;
        let ticket = SwitchTicket {
            generation: self.generation,
            server_id: server_id.to_string(),
            server_title,
        };
        self.session.pending_switch = Some(ticket.clone());
        self.session.buffering = true;
        self.session.error = None;
        Some(ticket)
    }

    /// Apply the resolution result for `ticket`. Either the new server becomes
    /// active with its source loaded, or nothing but the error changes.
    pub fn finish_switch(
        &mut self,
        ticket: &SwitchTicket,
        result: Result<String, ApiError>,
        media: &impl MediaElement,
    ) -> SwitchOutcome {
        if self.session.pending_switch.as_ref() != Some(ticket) {
            return SwitchOutcome::Stale;
        }
        self.session.pending_switch = None;
        self.session.buffering = false;

        let url = match result {
            Ok(url) if !url.trim().is_empty() => url,
            Ok(_) => return self.fail_switch(ticket, &ApiError::MissingStreamUrl),
            Err(err) => return self.fail_switch(ticket, &err),
        };

        tracing::info!(server = %ticket.server_title, "switched stream server");
        self.user_play_pending = false;
        media.load(&url);
        self.session.stream_url = url;
        self.session.active_server = Some(ticket.server_id.clone());
        self.session.phase = PlaybackPhase::Loading;
        self.session.position = 0.0;
        self.session.duration = 0.0;
        SwitchOutcome::Switched {
            resume_token: ticket.generation,
        }
    }

    fn fail_switch(&mut self, ticket: &SwitchTicket, err: &ApiError) -> SwitchOutcome {
        tracing::warn!(server = %ticket.server_title, error = %err, "server switch failed");
        self.session.error = Some(switch_failed_message(&ticket.server_title));
        SwitchOutcome::Failed
    }

    /// Auto-resume after a successful switch. Ignored if another switch has
    /// started since or the player was detached.
    pub fn resume_after_switch(&mut self, resume_token: u64, media: &impl MediaElement) {
        if resume_token != self.generation || self.session.is_switching() {
            return;
        }
        if let Err(err) = media.play() {
            tracing::debug!(error = %err, "auto-resume after switch was refused");
        }
    }

    /// Invalidate every outstanding ticket and resume token. Called when the
    /// player unmounts.
    pub fn detach(&mut self) {
        self.generation += 1;
        self.session.pending_switch = None;
        self.session.buffering = false;
    }

    /// Clear the error and return to a playable phase.
    pub fn dismiss_error(&mut self) {
        self.session.error = None;
        if self.session.phase == PlaybackPhase::Error {
            self.session.phase = PlaybackPhase::Paused;
        }
    }

    /// "Try Again" on the error overlay. A failed media element reloads the
    /// current source; any other error is simply cleared.
    pub fn retry(&mut self, media: &impl MediaElement) {
        let reload =
            self.session.phase == PlaybackPhase::Error && !self.session.stream_url.is_empty();
        self.dismiss_error();
        if reload {
            media.load(&self.session.stream_url);
            self.session.phase = PlaybackPhase::Loading;
            self.session.buffering = false;
        }
    }

    pub fn apply_key(&mut self, command: KeyCommand, media: &impl MediaElement) {
        match command {
            KeyCommand::TogglePlay => self.toggle_play(media),
            KeyCommand::SeekBy(delta) => self.seek(self.session.position + delta, media),
            KeyCommand::VolumeBy(delta) => {
                let target = ((self.session.volume + delta) * 100.0).round() / 100.0;
                self.set_volume(target, media);
            }
            KeyCommand::ToggleMute => self.toggle_mute(media),
            KeyCommand::ToggleFullscreen => self.toggle_fullscreen(media),
            KeyCommand::RateStep(direction) => self.step_playback_rate(direction, media),
        }
    }

    pub fn on_loaded_metadata(&mut self, duration: f64, media: &impl MediaElement) {
        self.session.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.session.position = self.session.position.min(self.session.duration);
        if matches!(self.session.phase, PlaybackPhase::Idle | PlaybackPhase::Loading) {
            self.session.phase = PlaybackPhase::Ready;
        }

        if self.autoplay {
            if let Err(err) = media.play() {
                tracing::debug!(error = %err, "autoplay was refused");
            }
        }
    }

    pub fn on_time_update(&mut self, current_time: f64) {
        if !current_time.is_finite() {
            return;
        }
        let upper = if self.session.duration > 0.0 {
            self.session.duration
        } else {
            f64::MAX
        };
        self.session.position = current_time.clamp(0.0, upper);
    }

    pub fn on_play(&mut self) {
        self.user_play_pending = false;
        self.session.phase = PlaybackPhase::Playing;
        self.session.error = None;
    }

    pub fn on_pause(&mut self) {
        if self.session.phase != PlaybackPhase::Error {
            self.session.phase = PlaybackPhase::Paused;
        }
    }

    pub fn on_waiting(&mut self) {
        self.session.buffering = true;
    }

    pub fn on_playing(&mut self) {
        self.session.buffering = false;
        self.session.phase = PlaybackPhase::Playing;
    }

    pub fn on_error(&mut self, detail: Option<&str>) {
        tracing::warn!(detail = detail.unwrap_or("unknown"), url = %self.session.stream_url, "media element error");
        self.session.error = Some(MEDIA_ERROR_MESSAGE.to_string());
        self.session.phase = PlaybackPhase::Error;
        if !self.session.is_switching() {
            self.session.buffering = false;
        }
    }

    /// Playback finished; the next episode is not started automatically.
    pub fn on_ended(&mut self) {
        self.session.phase = PlaybackPhase::Paused;
        self.session.buffering = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ServerEntry, ServerTier};
    use crate::player::media::testing::{MediaCommand, RecordingMedia};

    fn catalog() -> ServerCatalog {
        ServerCatalog::new(vec![
            ServerTier {
                title: "480p".to_string(),
                server_list: vec![ServerEntry {
                    server_id: "a1".to_string(),
                    title: "Server A".to_string(),
                }],
            },
            ServerTier {
                title: "720p".to_string(),
                server_list: vec![
                    ServerEntry {
                        server_id: "b2".to_string(),
                        title: "Server B".to_string(),
                    },
                    ServerEntry {
                        server_id: "c3".to_string(),
                        title: "Server C".to_string(),
                    },
                ],
            },
        ])
    }

    fn controller() -> PlaybackController {
        PlaybackController::new("https://x/a1.m3u8", catalog(), false)
    }

    fn ready_controller(media: &RecordingMedia) -> PlaybackController {
        let mut controller = controller();
        controller.on_loaded_metadata(120.0, media);
        media.clear();
        controller
    }

    #[test]
    fn mount_selects_first_server_and_waits_for_metadata() {
        let media = RecordingMedia::default();
        let mut controller = PlaybackController::new(
            "https://x/a1.m3u8",
            ServerCatalog::new(vec![ServerTier {
                title: "480p".to_string(),
                server_list: vec![ServerEntry {
                    server_id: "a1".to_string(),
                    title: "Server A".to_string(),
                }],
            }]),
            false,
        );

        assert_eq!(controller.session().active_server.as_deref(), Some("a1"));
        assert_eq!(controller.session().stream_url, "https://x/a1.m3u8");
        assert!(controller.session().is_loading());

        controller.on_loaded_metadata(1440.0, &media);
        assert!(!controller.session().is_loading());
        assert_eq!(controller.session().duration, 1440.0);
        assert!(media.commands().is_empty(), "no autoplay without the flag");
    }

    #[test]
    fn autoplay_starts_once_metadata_is_loaded() {
        let media = RecordingMedia::default();
        let mut controller = PlaybackController::new("https://x/a1.m3u8", catalog(), true);
        controller.on_loaded_metadata(60.0, &media);
        assert_eq!(media.commands(), vec![MediaCommand::Play]);
    }

    #[test]
    fn volume_is_clamped_and_coupled_to_mute() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        for (input, stored) in [(-0.5, 0.0), (0.0, 0.0), (0.35, 0.35), (1.0, 1.0), (7.0, 1.0)] {
            controller.set_volume(input, &media);
            assert_eq!(controller.session().volume, stored);
            assert_eq!(controller.session().muted, stored == 0.0, "input {input}");
        }
    }

    #[test]
    fn double_mute_restores_exact_volume() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.set_volume(0.37, &media);

        controller.toggle_mute(&media);
        assert!(controller.session().muted);
        assert_eq!(controller.session().volume, 0.0);

        controller.toggle_mute(&media);
        assert!(!controller.session().muted);
        assert_eq!(controller.session().volume, 0.37);
    }

    #[test]
    fn unmute_without_recorded_volume_uses_default() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.session.last_audible_volume = None;
        controller.set_volume(0.0, &media);
        controller.toggle_mute(&media);
        assert_eq!(controller.session().volume, DEFAULT_UNMUTE_VOLUME);
    }

    #[test]
    fn unmute_after_slider_to_zero_restores_previous_level() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.set_volume(0.8, &media);
        controller.set_volume(0.0, &media);
        assert!(controller.session().muted);
        controller.toggle_mute(&media);
        assert_eq!(controller.session().volume, 0.8);
    }

    #[test]
    fn playback_rate_is_clamped_and_stepped() {
        let media = RecordingMedia::default();
        let mut controller = controller();

        controller.set_playback_rate(3.0, &media);
        assert_eq!(controller.session().playback_rate, 2.0);
        controller.step_playback_rate(1, &media);
        assert_eq!(controller.session().playback_rate, 2.0);

        controller.set_playback_rate(0.1, &media);
        assert_eq!(controller.session().playback_rate, 0.5);
        controller.step_playback_rate(-1, &media);
        assert_eq!(controller.session().playback_rate, 0.5);

        controller.set_playback_rate(1.0, &media);
        controller.step_playback_rate(1, &media);
        assert_eq!(controller.session().playback_rate, 1.25);
        controller.step_playback_rate(-1, &media);
        controller.step_playback_rate(-1, &media);
        assert_eq!(controller.session().playback_rate, 0.75);
        assert_eq!(media.commands().last(), Some(&MediaCommand::Rate(0.75)));
    }

    #[test]
    fn seek_clamps_into_duration() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);

        controller.seek(-5.0, &media);
        assert_eq!(controller.session().position, 0.0);
        controller.seek(500.0, &media);
        assert_eq!(controller.session().position, 120.0);
        controller.seek(42.5, &media);
        assert_eq!(controller.session().position, 42.5);
        assert_eq!(
            media.commands(),
            vec![MediaCommand::Seek(0.0), MediaCommand::Seek(120.0), MediaCommand::Seek(42.5)]
        );
    }

    #[test]
    fn toggle_play_pauses_immediately_when_playing() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);

        controller.toggle_play(&media);
        assert_eq!(media.commands(), vec![MediaCommand::Play]);
        controller.on_play();
        assert!(controller.session().is_playing());

        controller.toggle_play(&media);
        assert_eq!(media.commands().last(), Some(&MediaCommand::Pause));
        assert_eq!(controller.session().phase, PlaybackPhase::Paused);
    }

    #[test]
    fn rejected_play_leaves_session_paused_with_error() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        media.reject_play.set(true);

        controller.toggle_play(&media);
        assert_eq!(controller.session().phase, PlaybackPhase::Paused);
        assert_eq!(controller.session().error.as_deref(), Some(PLAY_FAILED_MESSAGE));

        controller.dismiss_error();
        assert_eq!(controller.session().error, None);
    }

    #[test]
    fn late_rejection_of_user_play_shows_error() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);

        controller.toggle_play(&media);
        assert_eq!(controller.session().error, None);
        controller.on_play_rejected("NotAllowedError");
        assert_eq!(controller.session().error.as_deref(), Some(PLAY_FAILED_MESSAGE));
    }

    #[test]
    fn refused_resume_after_switch_is_silent() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        let ticket = controller.begin_switch("b2").expect("switch starts");
        let SwitchOutcome::Switched { resume_token } =
            controller.finish_switch(&ticket, Ok("https://x/b2.m3u8".to_string()), &media)
        else {
            panic!("switch should succeed");
        };

        controller.resume_after_switch(resume_token, &media);
        controller.on_play_rejected("NotAllowedError");
        assert_eq!(controller.session().error, None);
        assert_eq!(controller.session().active_server.as_deref(), Some("b2"));
    }

    #[test]
    fn refused_autoplay_is_silent() {
        let media = RecordingMedia::default();
        let mut controller = PlaybackController::new("https://x/a1.m3u8", catalog(), true);
        controller.on_loaded_metadata(60.0, &media);
        controller.on_play_rejected("NotAllowedError");
        assert_eq!(controller.session().error, None);
    }

    #[test]
    fn user_play_that_started_does_not_surface_later_rejections() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        controller.toggle_play(&media);
        controller.on_play();
        controller.on_play_rejected("AbortError");
        assert_eq!(controller.session().error, None);
    }

    #[test]
    fn switch_to_active_server_is_a_noop() {
        let mut controller = controller();
        assert_eq!(controller.begin_switch("a1"), None);
        assert!(!controller.session().buffering);
    }

    #[test]
    fn second_switch_is_ignored_while_first_is_pending() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);

        let first = controller.begin_switch("b2").expect("first switch proceeds");
        assert_eq!(controller.begin_switch("c3"), None);
        assert_eq!(controller.begin_switch("b2"), None);
        assert_eq!(controller.session().pending_server(), Some("b2"));

        controller.finish_switch(&first, Ok("https://x/b2.m3u8".to_string()), &media);
        assert!(controller.begin_switch("c3").is_some(), "allowed once resolved");
    }

    #[test]
    fn successful_switch_replaces_source_and_resumes() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        controller.on_play();

        let ticket = controller.begin_switch("b2").unwrap();
        assert!(controller.session().buffering);
        assert_eq!(controller.session().active_server.as_deref(), Some("a1"));

        let outcome =
            controller.finish_switch(&ticket, Ok("https://x/b2.m3u8".to_string()), &media);
        let SwitchOutcome::Switched { resume_token } = outcome else {
            panic!("expected a switched outcome, got {outcome:?}");
        };
        assert_eq!(controller.session().stream_url, "https://x/b2.m3u8");
        assert_eq!(controller.session().active_server.as_deref(), Some("b2"));
        assert!(!controller.session().buffering);
        assert_eq!(media.commands(), vec![MediaCommand::Load("https://x/b2.m3u8".to_string())]);

        controller.resume_after_switch(resume_token, &media);
        assert_eq!(media.commands().last(), Some(&MediaCommand::Play));
    }

    #[test]
    fn failed_switch_keeps_previous_server() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);

        let ticket = controller.begin_switch("b2").unwrap();
        let outcome = controller.finish_switch(
            &ticket,
            Err(ApiError::Status {
                status: 502,
                url: "https://api/server/b2".to_string(),
            }),
            &media,
        );

        assert_eq!(outcome, SwitchOutcome::Failed);
        assert_eq!(controller.session().active_server.as_deref(), Some("a1"));
        assert_eq!(controller.session().stream_url, "https://x/a1.m3u8");
        assert!(!controller.session().buffering);
        let error = controller.session().error.clone().unwrap_or_default();
        assert!(error.contains("Server B"), "error names the server: {error}");
        assert!(media.commands().is_empty());
    }

    #[test]
    fn blank_url_counts_as_failed_resolution() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        let ticket = controller.begin_switch("c3").unwrap();
        assert_eq!(
            controller.finish_switch(&ticket, Ok("   ".to_string()), &media),
            SwitchOutcome::Failed
        );
        assert_eq!(controller.session().active_server.as_deref(), Some("a1"));
    }

    #[test]
    fn completions_after_detach_are_discarded() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        let ticket = controller.begin_switch("b2").unwrap();

        controller.detach();
        let outcome =
            controller.finish_switch(&ticket, Ok("https://x/b2.m3u8".to_string()), &media);

        assert_eq!(outcome, SwitchOutcome::Stale);
        assert_eq!(controller.session().stream_url, "https://x/a1.m3u8");
        assert!(media.commands().is_empty());
    }

    #[test]
    fn stale_resume_token_does_not_play() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        let ticket = controller.begin_switch("b2").unwrap();
        let SwitchOutcome::Switched { resume_token } =
            controller.finish_switch(&ticket, Ok("https://x/b2.m3u8".to_string()), &media)
        else {
            panic!("switch should succeed");
        };
        let _pending = controller.begin_switch("c3").unwrap();
        media.clear();

        controller.resume_after_switch(resume_token, &media);
        assert!(media.commands().is_empty());
    }

    #[test]
    fn play_toggle_is_suspended_during_switch() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        controller.begin_switch("b2").unwrap();
        controller.toggle_play(&media);
        assert!(media.commands().is_empty());
    }

    #[test]
    fn fullscreen_state_follows_platform_notifications() {
        let media = RecordingMedia::default();
        let mut controller = controller();

        controller.toggle_fullscreen(&media);
        assert!(!controller.session().fullscreen, "not optimistic");
        controller.on_fullscreen_change(true);
        controller.toggle_fullscreen(&media);
        assert_eq!(
            media.commands(),
            vec![MediaCommand::EnterFullscreen, MediaCommand::ExitFullscreen]
        );
    }

    #[test]
    fn media_error_stops_loading_and_ended_pauses() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.on_error(Some("MEDIA_ERR_NETWORK"));
        assert!(!controller.session().is_loading());
        assert_eq!(controller.session().error.as_deref(), Some(MEDIA_ERROR_MESSAGE));
        controller.dismiss_error();
        assert_eq!(controller.session().phase, PlaybackPhase::Paused);

        controller.on_loaded_metadata(30.0, &media);
        controller.on_play();
        controller.on_ended();
        assert_eq!(controller.session().phase, PlaybackPhase::Paused);
        assert!(media.commands().is_empty(), "no autoplay-next");
    }

    #[test]
    fn retry_reloads_after_media_error() {
        let media = RecordingMedia::default();
        let mut controller = controller();
        controller.on_error(None);

        controller.retry(&media);
        assert_eq!(controller.session().error, None);
        assert!(controller.session().is_loading());
        assert_eq!(media.commands(), vec![MediaCommand::Load("https://x/a1.m3u8".to_string())]);

        controller.on_loaded_metadata(60.0, &media);
        media.clear();
        media.reject_play.set(true);
        controller.toggle_play(&media);
        media.clear();
        controller.retry(&media);
        assert_eq!(controller.session().error, None);
        assert!(media.commands().is_empty(), "play failures just clear the message");
    }

    #[test]
    fn keyboard_commands_drive_the_session() {
        let media = RecordingMedia::default();
        let mut controller = ready_controller(&media);
        controller.on_time_update(5.0);

        controller.apply_key(KeyCommand::SeekBy(-10.0), &media);
        assert_eq!(controller.session().position, 0.0);
        controller.apply_key(KeyCommand::SeekBy(10.0), &media);
        assert_eq!(controller.session().position, 10.0);

        controller.set_volume(0.1, &media);
        controller.apply_key(KeyCommand::VolumeBy(-0.1), &media);
        assert_eq!(controller.session().volume, 0.0);
        assert!(controller.session().muted);
        controller.apply_key(KeyCommand::VolumeBy(0.1), &media);
        assert_eq!(controller.session().volume, 0.1);

        controller.apply_key(KeyCommand::RateStep(1), &media);
        assert_eq!(controller.session().playback_rate, 1.25);
    }

    #[test]
    fn waiting_and_playing_toggle_buffering() {
        let mut controller = controller();
        controller.on_waiting();
        assert!(controller.session().buffering);
        controller.on_playing();
        assert!(!controller.session().buffering);
        assert!(controller.session().is_playing());
    }
}
