//! Keyboard shortcuts for the video player.

pub const SEEK_STEP_SECS: f64 = 10.0;
pub const VOLUME_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    TogglePlay,
    SeekBy(f64),
    VolumeBy(f64),
    ToggleMute,
    ToggleFullscreen,
    /// `+1` speeds up by one rate step, `-1` slows down.
    RateStep(i8),
}

/// The parts of a keydown event the shortcut table looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is inside an input, textarea, select or contenteditable.
    pub editable_target: bool,
    pub composing: bool,
}

impl<'a> KeyInput<'a> {
    pub fn key(key: &'a str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }
}

/// Map a key press to a player command. A `Some` result means the caller
/// must also prevent the browser's default action.
pub fn command_for_key(input: &KeyInput<'_>) -> Option<KeyCommand> {
    if input.editable_target || input.composing || input.ctrl || input.meta || input.alt {
        return None;
    }

    match input.key {
        " " | "Spacebar" | "k" | "K" => Some(KeyCommand::TogglePlay),
        "ArrowLeft" => Some(KeyCommand::SeekBy(-SEEK_STEP_SECS)),
        "ArrowRight" => Some(KeyCommand::SeekBy(SEEK_STEP_SECS)),
        "ArrowUp" => Some(KeyCommand::VolumeBy(VOLUME_STEP)),
        "ArrowDown" => Some(KeyCommand::VolumeBy(-VOLUME_STEP)),
        "m" | "M" => Some(KeyCommand::ToggleMute),
        "f" | "F" => Some(KeyCommand::ToggleFullscreen),
        "." | ">" => Some(KeyCommand::RateStep(1)),
        "," | "<" => Some(KeyCommand::RateStep(-1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_table() {
        let cases = [
            (" ", Some(KeyCommand::TogglePlay)),
            ("k", Some(KeyCommand::TogglePlay)),
            ("ArrowLeft", Some(KeyCommand::SeekBy(-10.0))),
            ("ArrowRight", Some(KeyCommand::SeekBy(10.0))),
            ("ArrowUp", Some(KeyCommand::VolumeBy(0.1))),
            ("ArrowDown", Some(KeyCommand::VolumeBy(-0.1))),
            ("m", Some(KeyCommand::ToggleMute)),
            ("f", Some(KeyCommand::ToggleFullscreen)),
            (">", Some(KeyCommand::RateStep(1))),
            (".", Some(KeyCommand::RateStep(1))),
            ("<", Some(KeyCommand::RateStep(-1))),
            (",", Some(KeyCommand::RateStep(-1))),
            ("x", None),
            ("Enter", None),
        ];
        for (key, expected) in cases {
            assert_eq!(command_for_key(&KeyInput::key(key)), expected, "key {key:?}");
        }
    }

    #[test]
    fn typing_in_inputs_is_ignored() {
        let input = KeyInput {
            key: "k",
            editable_target: true,
            ..KeyInput::default()
        };
        assert_eq!(command_for_key(&input), None);
    }

    #[test]
    fn modified_keys_are_left_to_the_browser() {
        let reload = KeyInput {
            key: "f",
            ctrl: true,
            ..KeyInput::default()
        };
        let back = KeyInput {
            key: "ArrowLeft",
            alt: true,
            ..KeyInput::default()
        };
        assert_eq!(command_for_key(&reload), None);
        assert_eq!(command_for_key(&back), None);
    }
}
