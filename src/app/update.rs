//! Message update handlers

use std::time::Instant;

use anyhow::{Context, bail};
use iced::Task;

use super::{App, Message};
use crate::features::session;

impl App {
    /// Handle messages by delegating to the matching handler
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_progress(&message) {
            return task;
        }
        if let Some(task) = self.handle_button(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }

    fn handle_progress(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ProgressInputChanged(value) => {
                self.progress_input = value.clone();
                self.input_error = None;
                Some(Task::none())
            }
            Message::UpdateProgress => {
                match parse_progress(&self.progress_input) {
                    Ok(progress) => {
                        self.input_error = None;
                        self.play_button.set_progress(progress, true);
                    }
                    Err(e) => {
                        tracing::warn!("Rejected progress input: {:#}", e);
                        self.input_error = Some(format!("{:#}", e));
                    }
                }
                Some(Task::none())
            }
            _ => None,
        }
    }

    fn handle_button(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleState => {
                let target = self.play_button.button_state().toggled();
                self.play_button.set_button_state(target, true);
                Some(Task::none())
            }
            Message::ButtonHoverEnter => {
                self.hover.start();
                Some(Task::none())
            }
            Message::ButtonHoverExit => {
                self.hover.stop();
                Some(Task::none())
            }
            _ => None,
        }
    }

    fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                self.play_button.tick(now);
                self.hover.tick(now);
                Some(Task::none())
            }
            Message::CloseRequested(id) => {
                let state = self.play_button.save_state(self.screen_state());
                if let Err(e) = session::save(&state) {
                    tracing::warn!("Failed to save session: {}", e);
                } else {
                    tracing::info!(
                        "Session saved (state={}, progress={:.1})",
                        state.button_state,
                        state.progress
                    );
                }
                Some(iced::window::close(*id))
            }
            _ => None,
        }
    }
}

/// Parse the progress entry into a percent
///
/// The widget does not clamp, so the entry enforces its 0 - 100 contract.
pub fn parse_progress(input: &str) -> anyhow::Result<f32> {
    let trimmed = input.trim();
    let value: f32 = trimmed
        .parse()
        .with_context(|| format!("'{}' is not a number", trimmed))?;

    if !(0.0..=100.0).contains(&value) {
        bail!("progress must be between 0 and 100, got {}", value);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::ui::primitives::ButtonState;
    use crate::ui::primitives::play_button::{
        PROGRESS_ANIMATION_DURATION, STATE_ANIMATION_DURATION,
    };

    fn app() -> App {
        App::with_settings(Settings::default(), None)
    }

    #[test]
    fn test_parse_progress() {
        assert_eq!(parse_progress("42.5").unwrap(), 42.5);
        assert_eq!(parse_progress("  0 ").unwrap(), 0.0);
        assert_eq!(parse_progress("100").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_progress_rejects_bad_input() {
        let err = parse_progress("abc").unwrap_err();
        assert!(format!("{:#}", err).contains("'abc' is not a number"));

        assert!(parse_progress("").is_err());
        assert!(parse_progress("100.5").is_err());
        assert!(parse_progress("-1").is_err());
        assert!(parse_progress("NaN").is_err());
    }

    #[test]
    fn test_update_progress_starts_animation() {
        let mut app = app();
        let _ = app.update(Message::ProgressInputChanged("60".to_string()));
        let _ = app.update(Message::UpdateProgress);

        assert!(app.input_error.is_none());
        assert!(app.play_button.is_animating());
        assert!(app.has_active_animations());

        app.play_button.tick(Instant::now() + PROGRESS_ANIMATION_DURATION);
        assert_eq!(app.play_button.progress(), 60.0);
    }

    #[test]
    fn test_invalid_progress_sets_error_and_keeps_value() {
        let mut app = app();
        let _ = app.update(Message::ProgressInputChanged("lots".to_string()));
        let _ = app.update(Message::UpdateProgress);

        assert!(app.input_error.is_some());
        assert!(!app.play_button.is_animating());
        assert_eq!(app.play_button.progress(), 0.0);

        // Editing clears the error
        let _ = app.update(Message::ProgressInputChanged("5".to_string()));
        assert!(app.input_error.is_none());
    }

    #[test]
    fn test_toggle_state_cross_fades() {
        let mut app = app();
        let _ = app.update(Message::ToggleState);
        assert!(app.play_button.is_transitioning());

        // A second toggle during the fade is dropped
        let _ = app.update(Message::ToggleState);

        app.play_button.tick(Instant::now() + STATE_ANIMATION_DURATION);
        assert_eq!(app.play_button.button_state(), ButtonState::Pause);
        assert!(!app.play_button.is_animating());
    }

    #[test]
    fn test_hover_messages() {
        let mut app = app();
        let _ = app.update(Message::ButtonHoverEnter);
        assert!(app.hover.is_hovered());
        let _ = app.update(Message::ButtonHoverExit);
        assert!(!app.hover.is_hovered());
    }
}
