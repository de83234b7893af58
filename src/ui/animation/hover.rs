//! Hover highlight animation using iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration (200ms matches the glyph cross-fade)
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Single hover animation state for one widget
#[derive(Debug)]
pub struct SingleHoverAnimation {
    animation: Animated<f32>,
    hovered: bool,
}

impl Default for SingleHoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleHoverAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, hover_easing()),
            hovered: false,
        }
    }

    /// Cursor entered: fade towards 1.0
    pub fn start(&mut self) {
        self.hovered = true;
        self.animation.update(1.0.into());
    }

    /// Cursor left: fade back to 0.0
    pub fn stop(&mut self) {
        self.hovered = false;
        self.animation.update(0.0.into());
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current highlight strength (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_animation() {
        let mut anim = SingleHoverAnimation::new();

        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_hovered());

        anim.start();
        assert!(anim.is_hovered());
        assert!(anim.is_animating() || anim.progress() > 0.0);

        anim.stop();
        assert!(!anim.is_hovered());
    }

    #[test]
    fn test_progress_range() {
        let mut anim = SingleHoverAnimation::new();
        anim.start();
        anim.tick(Instant::now() + HOVER_DURATION);
        assert!(anim.progress() >= 0.0);
        assert!(anim.progress() <= 1.0);
    }
}
