//! Application messages

use iced::window;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Progress ============
    /// Progress entry text changed
    ProgressInputChanged(String),
    /// Apply the entered progress (animated)
    UpdateProgress,

    // ============ Button state ============
    /// Switch to the other button state (animated)
    ToggleState,
    /// Cursor entered the play button
    ButtonHoverEnter,
    /// Cursor left the play button
    ButtonHoverExit,

    // ============ Frame / window ============
    /// Animation frame while something is animating
    AnimationTick,
    /// Window close requested: save session first
    CloseRequested(window::Id),
}
