use crate::api::{ServerEntry, ServerTier};

pub const MIN_PLAYBACK_RATE: f64 = 0.5;
pub const MAX_PLAYBACK_RATE: f64 = 2.0;
pub const PLAYBACK_RATE_STEP: f64 = 0.25;
pub const DEFAULT_UNMUTE_VOLUME: f64 = 0.5;

/// Lifecycle of the media element as seen by the controller.
///
/// `Idle → Loading → Ready ⇄ Playing ⇄ Paused`, with `Error` reachable from
/// anywhere. A pending server switch is tracked separately on the session and
/// suspends user-driven play/pause while it is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Error,
}

/// Quality tiers in API order. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerCatalog {
    tiers: Vec<ServerTier>,
}

impl ServerCatalog {
    pub fn new(tiers: Vec<ServerTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[ServerTier] {
        &self.tiers
    }

    /// First server of the first tier that has any.
    pub fn first_server(&self) -> Option<&ServerEntry> {
        self.tiers
            .iter()
            .find_map(|tier| tier.server_list.first())
    }

    pub fn find(&self, server_id: &str) -> Option<&ServerEntry> {
        self.tiers
            .iter()
            .flat_map(|tier| tier.server_list.iter())
            .find(|server| server.server_id == server_id)
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(|tier| tier.server_list.is_empty())
    }
}

/// Handle for one outstanding server switch. Completions carrying a ticket
/// that no longer matches the session are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTicket {
    pub generation: u64,
    pub server_id: String,
    pub server_title: String,
}

/// In-memory state of one mounted player. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub stream_url: String,
    pub active_server: Option<String>,
    pub phase: PlaybackPhase,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    /// Restored by unmute; `None` falls back to [`DEFAULT_UNMUTE_VOLUME`].
    pub last_audible_volume: Option<f64>,
    pub playback_rate: f64,
    pub fullscreen: bool,
    pub buffering: bool,
    pub error: Option<String>,
    pub pending_switch: Option<SwitchTicket>,
}

impl PlaybackSession {
    pub fn new(stream_url: impl Into<String>, active_server: Option<String>) -> Self {
        let stream_url = stream_url.into();
        let phase = if stream_url.trim().is_empty() {
            PlaybackPhase::Idle
        } else {
            PlaybackPhase::Loading
        };
        Self {
            stream_url,
            active_server,
            phase,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            last_audible_volume: Some(1.0),
            playback_rate: 1.0,
            fullscreen: false,
            buffering: false,
            error: None,
            pending_switch: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PlaybackPhase::Loading
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_switching(&self) -> bool {
        self.pending_switch.is_some()
    }

    pub fn pending_server(&self) -> Option<&str> {
        self.pending_switch
            .as_ref()
            .map(|ticket| ticket.server_id.as_str())
    }

    /// Played fraction in `0.0..=100.0`; zero while the duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(title: &str, servers: &[(&str, &str)]) -> ServerTier {
        ServerTier {
            title: title.to_string(),
            server_list: servers
                .iter()
                .map(|(id, title)| ServerEntry {
                    server_id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn first_server_skips_empty_tiers() {
        let catalog = ServerCatalog::new(vec![
            tier("360p", &[]),
            tier("480p", &[("a1", "Server A"), ("a2", "Server B")]),
        ]);
        assert_eq!(catalog.first_server().map(|s| s.server_id.as_str()), Some("a1"));
        assert_eq!(catalog.find("a2").map(|s| s.title.as_str()), Some("Server B"));
        assert!(catalog.find("zz").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = ServerCatalog::new(vec![tier("720p", &[])]);
        assert!(catalog.is_empty());
        assert!(catalog.first_server().is_none());
    }

    #[test]
    fn new_session_without_url_is_idle() {
        assert_eq!(PlaybackSession::new("", None).phase, PlaybackPhase::Idle);
        assert_eq!(
            PlaybackSession::new("https://x/a1.m3u8", None).phase,
            PlaybackPhase::Loading
        );
    }

    #[test]
    fn progress_is_zero_until_duration_is_known() {
        let mut session = PlaybackSession::new("https://x/a1.m3u8", None);
        session.position = 30.0;
        assert_eq!(session.progress_percent(), 0.0);
        session.duration = 120.0;
        assert_eq!(session.progress_percent(), 25.0);
    }
}
