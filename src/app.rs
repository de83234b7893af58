//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Settings, session};
use crate::ui::animation::SingleHoverAnimation;
use crate::ui::primitives::PlayButton;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        if Settings::file_path().is_some_and(|path| !path.exists()) {
            // Write defaults once so the style options are discoverable
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }

        (Self::with_settings(settings, session::load()), Task::none())
    }

    /// Build the app from loaded settings and an optional previous session
    pub fn with_settings(settings: Settings, session: Option<session::Session>) -> Self {
        let mut play_button = PlayButton::new(settings.play_button, settings.effective_density());
        tracing::info!(
            "Play button ready: stroke {:.1}px, progress {:.1}, state {}",
            play_button.stroke_width(),
            play_button.progress(),
            play_button.button_state()
        );

        let screen = match session {
            Some(session) => {
                let screen = play_button.restore_state(session);
                tracing::info!(
                    "Restored session: progress {:.1}, state {}",
                    play_button.progress(),
                    play_button.button_state()
                );
                screen
            }
            None => Default::default(),
        };

        Self {
            settings,
            play_button,
            hover: SingleHoverAnimation::new(),
            progress_input: screen.progress_input,
            input_error: None,
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Progress Play Button".to_string()
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let close_request_sub = iced::window::close_requests().map(Message::CloseRequested);

        // Frames only while something is moving
        let animation_sub = if self.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([close_request_sub, animation_sub])
    }
}
