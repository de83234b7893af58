//! Application state

use crate::features::{ScreenState, Settings};
use crate::ui::animation::SingleHoverAnimation;
use crate::ui::primitives::PlayButton;

/// Demo application state
pub struct App {
    pub settings: Settings,
    pub play_button: PlayButton,
    /// Hover highlight on the play button
    pub hover: SingleHoverAnimation,
    /// Raw contents of the progress entry field
    pub progress_input: String,
    /// Last progress parse error, shown under the entry field
    pub input_error: Option<String>,
}

impl App {
    /// Base state saved with the play button
    pub fn screen_state(&self) -> ScreenState {
        ScreenState {
            progress_input: self.progress_input.clone(),
        }
    }

    /// Check if the button or the hover highlight is animating
    pub fn has_active_animations(&self) -> bool {
        self.play_button.is_animating() || self.hover.is_animating()
    }
}
