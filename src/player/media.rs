use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("media element is not mounted")]
    Unavailable,
    #[error("play request rejected: {0}")]
    PlayRejected(String),
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}

/// Commands the controller issues to the platform media element.
///
/// Every method is a request; outcomes arrive later as media events
/// (`play`, `pause`, `loadedmetadata`, `fullscreenchange`, ...).
pub trait MediaElement {
    /// Ask the element to start playback. An `Err` means the request was
    /// refused outright; asynchronous refusals are reported through
    /// `PlaybackController::on_play_rejected`, which only surfaces them for
    /// plays the user asked for.
    fn play(&self) -> Result<(), MediaError>;
    fn pause(&self);
    fn seek(&self, seconds: f64);
    fn set_volume(&self, volume: f64);
    fn set_playback_rate(&self, rate: f64);
    /// Replace the source and reload the element.
    fn load(&self, url: &str);
    fn request_fullscreen(&self) -> Result<(), MediaError>;
    fn exit_fullscreen(&self) -> Result<(), MediaError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum MediaCommand {
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
        Rate(f64),
        Load(String),
        EnterFullscreen,
        ExitFullscreen,
    }

    /// Records every command; `play` can be told to fail.
    #[derive(Default)]
    pub struct RecordingMedia {
        commands: RefCell<Vec<MediaCommand>>,
        pub reject_play: Cell<bool>,
    }

    impl RecordingMedia {
        pub fn commands(&self) -> Vec<MediaCommand> {
            self.commands.borrow().clone()
        }

        pub fn clear(&self) {
            self.commands.borrow_mut().clear();
        }

        fn push(&self, command: MediaCommand) {
            self.commands.borrow_mut().push(command);
        }
    }

    impl MediaElement for RecordingMedia {
        fn play(&self) -> Result<(), MediaError> {
            self.push(MediaCommand::Play);
            if self.reject_play.get() {
                Err(MediaError::PlayRejected("NotAllowedError".to_string()))
            } else {
                Ok(())
            }
        }

        fn pause(&self) {
            self.push(MediaCommand::Pause);
        }

        fn seek(&self, seconds: f64) {
            self.push(MediaCommand::Seek(seconds));
        }

        fn set_volume(&self, volume: f64) {
            self.push(MediaCommand::Volume(volume));
        }

        fn set_playback_rate(&self, rate: f64) {
            self.push(MediaCommand::Rate(rate));
        }

        fn load(&self, url: &str) {
            self.push(MediaCommand::Load(url.to_string()));
        }

        fn request_fullscreen(&self) -> Result<(), MediaError> {
            self.push(MediaCommand::EnterFullscreen);
            Ok(())
        }

        fn exit_fullscreen(&self) -> Result<(), MediaError> {
            self.push(MediaCommand::ExitFullscreen);
            Ok(())
        }
    }
}
