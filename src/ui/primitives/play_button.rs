//! Play/pause button with a circular progress ring
//!
//! The ring fills clockwise from 12 o'clock as progress goes from 0 to 100.
//! The center shows a play or pause glyph; animated state changes
//! cross-fade the two glyphs.
//!
//! # Animation
//!
//! Animations are explicit [`Tween`]s stepped by [`PlayButton::tick`]. The
//! owner drives ticks from a frame subscription while
//! [`PlayButton::is_animating`] is true.

mod geometry;
mod glyphs;
mod saved_state;
mod style;
mod widget;

use std::time::{Duration, Instant};

use iced::widget::canvas::{Cache, Frame};
use iced::{Element, Size};
use serde::{Deserialize, Serialize};

use super::progress_ring::ProgressRing;
use crate::ui::animation::Tween;

use glyphs::{ALPHA_INVISIBLE, ALPHA_VISIBLE, Glyph};
use widget::PlayButtonWidget;

pub use geometry::{Layout, sweep_angle};
pub use saved_state::{InstanceState, SavedState};
pub use style::PlayButtonStyle;

/// Duration of an animated progress change
pub const PROGRESS_ANIMATION_DURATION: Duration = Duration::from_millis(300);
/// Duration of each leg of the glyph cross-fade
pub const STATE_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Which glyph the button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ButtonState {
    #[default]
    Play,
    Pause,
}

impl ButtonState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Self::Play => Self::Pause,
            Self::Pause => Self::Play,
        }
    }
}

impl From<ButtonState> for u8 {
    fn from(state: ButtonState) -> Self {
        match state {
            ButtonState::Play => 0,
            ButtonState::Pause => 1,
        }
    }
}

impl TryFrom<u8> for ButtonState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Play),
            1 => Ok(Self::Pause),
            other => Err(format!("unknown button state {}", other)),
        }
    }
}

impl std::fmt::Display for ButtonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonState::Play => write!(f, "Play"),
            ButtonState::Pause => write!(f, "Pause"),
        }
    }
}

/// In-flight glyph cross-fade
#[derive(Debug, Clone, Copy)]
struct Transition {
    target: ButtonState,
    /// Alpha of the target glyph, 0 -> 255
    appear: Tween,
    /// Alpha of the other glyph, 255 -> 0
    disappear: Tween,
}

/// Play button model: progress, button state and their animations
pub struct PlayButton {
    style: PlayButtonStyle,
    /// Ring stroke width in pixels, fixed at construction
    stroke_width: f32,
    /// Displayed progress (0 - 100, not enforced)
    progress: f32,
    button_state: ButtonState,
    progress_tween: Option<Tween>,
    transition: Option<Transition>,
    play_alpha: u8,
    pause_alpha: u8,
    cache: Cache,
}

impl Default for PlayButton {
    fn default() -> Self {
        Self::new(PlayButtonStyle::default(), 1.0)
    }
}

impl PlayButton {
    /// Build from a style; `density` converts the dp stroke width to pixels
    pub fn new(style: PlayButtonStyle, density: f32) -> Self {
        Self {
            stroke_width: style.progress_width * density,
            progress: style.progress,
            button_state: style.button_state,
            progress_tween: None,
            transition: None,
            play_alpha: ALPHA_VISIBLE,
            pause_alpha: ALPHA_VISIBLE,
            cache: Cache::new(),
            style,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Layout for the proposed size
    pub fn measure(&self, proposed: Size) -> Layout {
        Layout::measure(proposed, self.stroke_width)
    }

    /// Request a redraw
    fn invalidate(&self) {
        self.cache.clear();
    }

    // ---------------------------------------------------------------------
    // Progress
    // ---------------------------------------------------------------------

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set the displayed progress, optionally animated over 300ms
    ///
    /// `progress` is expected in `0.0..=100.0`; it is not clamped.
    pub fn set_progress(&mut self, progress: f32, animate: bool) {
        self.set_progress_at(progress, animate, Instant::now());
    }

    pub(crate) fn set_progress_at(&mut self, progress: f32, animate: bool, now: Instant) {
        if animate {
            // Replaces any running tween, starting from the value on screen
            tracing::debug!("Animating progress {:.1} -> {:.1}", self.progress, progress);
            self.progress_tween = Some(Tween::new(
                self.progress,
                progress,
                now,
                PROGRESS_ANIMATION_DURATION,
            ));
        } else {
            self.progress_tween = None;
            self.set_progress_internal(progress);
        }
    }

    fn set_progress_internal(&mut self, progress: f32) {
        self.progress = progress;
        self.invalidate();
    }

    // ---------------------------------------------------------------------
    // Button state
    // ---------------------------------------------------------------------

    pub fn button_state(&self) -> ButtonState {
        self.button_state
    }

    /// Whether a glyph cross-fade is running
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Set the glyph state, optionally cross-fading over 200ms
    ///
    /// Ignored while a cross-fade is already running.
    pub fn set_button_state(&mut self, state: ButtonState, animate: bool) {
        self.set_button_state_at(state, animate, Instant::now());
    }

    pub(crate) fn set_button_state_at(&mut self, state: ButtonState, animate: bool, now: Instant) {
        if self.transition.is_some() {
            tracing::debug!("Button state change to {} dropped, transition running", state);
            return;
        }

        if animate {
            tracing::debug!("Cross-fading button state {} -> {}", self.button_state, state);
            let visible = f32::from(ALPHA_VISIBLE);
            let invisible = f32::from(ALPHA_INVISIBLE);
            self.transition = Some(Transition {
                target: state,
                appear: Tween::new(invisible, visible, now, STATE_ANIMATION_DURATION),
                disappear: Tween::new(visible, invisible, now, STATE_ANIMATION_DURATION),
            });
            self.apply_transition_alphas(state, ALPHA_INVISIBLE, ALPHA_VISIBLE);
        } else {
            self.set_button_state_internal(state);
        }
    }

    fn set_button_state_internal(&mut self, state: ButtonState) {
        self.button_state = state;
        self.invalidate();
    }

    fn apply_transition_alphas(&mut self, target: ButtonState, appear: u8, disappear: u8) {
        let (play, pause) = match target {
            ButtonState::Play => (appear, disappear),
            ButtonState::Pause => (disappear, appear),
        };
        self.play_alpha = play;
        self.pause_alpha = pause;
        self.invalidate();
    }

    /// Current (play, pause) glyph alphas
    pub fn glyph_alphas(&self) -> (u8, u8) {
        if self.transition.is_some() {
            (self.play_alpha, self.pause_alpha)
        } else {
            match self.button_state {
                ButtonState::Play => (ALPHA_VISIBLE, ALPHA_INVISIBLE),
                ButtonState::Pause => (ALPHA_INVISIBLE, ALPHA_VISIBLE),
            }
        }
    }

    // ---------------------------------------------------------------------
    // Animation
    // ---------------------------------------------------------------------

    pub fn is_animating(&self) -> bool {
        self.progress_tween.is_some() || self.transition.is_some()
    }

    /// Advance running animations to `now`
    ///
    /// Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(tween) = self.progress_tween {
            self.set_progress_internal(tween.value_at(now));
            if tween.is_finished(now) {
                self.progress_tween = None;
            }
            changed = true;
        }

        if let Some(transition) = self.transition {
            let appear = alpha(transition.appear.value_at(now));
            let disappear = alpha(transition.disappear.value_at(now));
            self.apply_transition_alphas(transition.target, appear, disappear);

            // Both legs share a start and a duration
            if transition.appear.is_finished(now) && transition.disappear.is_finished(now) {
                self.transition = None;
                self.set_button_state_internal(transition.target);
                tracing::debug!("Button state committed: {}", transition.target);
            }
            changed = true;
        }

        changed
    }

    // ---------------------------------------------------------------------
    // Drawing
    // ---------------------------------------------------------------------

    /// Paint ring and glyphs into `frame`
    pub fn draw(&self, frame: &mut Frame, layout: &Layout) {
        ProgressRing::new(self.progress)
            .stroke_width(self.stroke_width)
            .progress_color(self.style.progress_color)
            .draw(frame, layout.progress_rect);

        // Outside a transition one alpha is zero, so only one glyph is drawn
        let (play_alpha, pause_alpha) = self.glyph_alphas();
        let bounds = layout.glyph_bounds;
        Glyph::Play.draw(frame, bounds, self.style.play_button_tint, play_alpha);
        Glyph::Pause.draw(frame, bounds, self.style.pause_button_tint, pause_alpha);
    }

    /// Build the square widget; `highlight` (0.0 - 1.0) tints the inner disc
    pub fn view<'a, Message: 'a>(&'a self, highlight: f32) -> Element<'a, Message> {
        PlayButtonWidget::new(self).highlight(highlight).into()
    }

    // ---------------------------------------------------------------------
    // Instance state
    // ---------------------------------------------------------------------

    /// Package button state and progress after the host's base state
    pub fn save_state<S>(&self, super_state: S) -> SavedState<S> {
        SavedState::new(super_state, self.button_state, self.progress)
    }

    /// Restore from a saved payload, returning the base state for the host
    ///
    /// Only a [`SavedState`] touches the widget; fields are written directly,
    /// without animation or redraw.
    pub fn restore_state<S>(&mut self, state: InstanceState<S>) -> S {
        match state {
            InstanceState::Saved(saved) => {
                // Restored values win over anything still in flight
                self.progress_tween = None;
                self.transition = None;
                self.button_state = saved.button_state;
                self.progress = saved.progress;
                self.invalidate();
                saved.into_super_state()
            }
            InstanceState::Base(base) => base,
        }
    }
}

/// Round an interpolated alpha into 0-255
fn alpha(value: f32) -> u8 {
    value.round().clamp(f32::from(ALPHA_INVISIBLE), f32::from(ALPHA_VISIBLE)) as u8
}
