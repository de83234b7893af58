//! Session persistence across restarts
//!
//! The demo window keeps a small base state of its own; the play button
//! appends its button state and progress to it through [`SavedState`].
//! A session file written before the button existed, or by anything else,
//! restores as a base state only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::settings::{self, SettingsError};
use crate::ui::primitives::{InstanceState, SavedState};

/// Demo screen state saved alongside the play button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenState {
    /// Contents of the progress entry field
    pub progress_input: String,
}

/// What the session file holds
pub type Session = InstanceState<ScreenState>;

/// Get the session file path
pub fn file_path() -> Option<PathBuf> {
    settings::config_file("session.json")
}

/// Load the last session, `None` when there is none or it cannot be read
pub fn load() -> Option<Session> {
    let path = file_path()?;
    if !path.exists() {
        return None;
    }

    match load_from_file(&path) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session {:?}: {}", path, e);
            None
        }
    }
}

pub fn load_from_file(path: &Path) -> Result<Session, SettingsError> {
    settings::read_json(path)
}

/// Save the session to the default file
pub fn save(state: &SavedState<ScreenState>) -> Result<(), SettingsError> {
    match file_path() {
        Some(path) => save_to_file(&path, state),
        None => Err(SettingsError::Io(
            "Could not determine config directory".to_string(),
        )),
    }
}

pub fn save_to_file(path: &Path, state: &SavedState<ScreenState>) -> Result<(), SettingsError> {
    settings::write_json(path, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::primitives::{ButtonState, PlayButton, PlayButtonStyle};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("progressplaybutton-session-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_session_round_trip_restores_button() {
        let path = temp_path("session.json");

        let mut button = PlayButton::new(PlayButtonStyle::default(), 1.0);
        button.set_progress(42.5, false);
        button.set_button_state(ButtonState::Pause, false);
        let screen = ScreenState {
            progress_input: "42.5".to_string(),
        };
        save_to_file(&path, &button.save_state(screen.clone())).unwrap();

        let mut fresh = PlayButton::new(PlayButtonStyle::default(), 1.0);
        let restored = fresh.restore_state(load_from_file(&path).unwrap());

        assert_eq!(restored, screen);
        assert_eq!(fresh.progress(), 42.5);
        assert_eq!(fresh.button_state(), ButtonState::Pause);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_base_only_session() {
        let path = temp_path("base-only.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"progress_input": "10"}"#).unwrap();

        let session = load_from_file(&path).unwrap();
        assert_eq!(
            session,
            InstanceState::Base(ScreenState {
                progress_input: "10".to_string()
            })
        );

        let mut button = PlayButton::new(PlayButtonStyle::default(), 1.0);
        button.restore_state(session);
        assert_eq!(button.progress(), 0.0);
        assert_eq!(button.button_state(), ButtonState::Play);

        let _ = std::fs::remove_file(&path);
    }
}
