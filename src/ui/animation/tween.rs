//! Explicit time-based interpolation
//!
//! A `Tween` carries everything needed to compute an animated value at any
//! instant: start value, end value, start time, duration and easing curve.
//! Owners step it from their frame tick and drop it once it is finished.

use std::time::{Duration, Instant};

/// Easing curve applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Slow start and end, fast middle
    #[default]
    AccelerateDecelerate,
}

impl Curve {
    /// Map normalized time `t` (0.0 - 1.0) to normalized progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::AccelerateDecelerate => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

/// A single running interpolation between two `f32` values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    curve: Curve,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            curve: Curve::default(),
        }
    }

    /// Normalized elapsed time (0.0 - 1.0)
    fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.fraction(now);
        if t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            // Land exactly on the target, no float drift
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.apply(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn test_curve_endpoints() {
        let curve = Curve::AccelerateDecelerate;
        assert!(curve.apply(0.0).abs() < 1e-6);
        assert!((curve.apply(1.0) - 1.0).abs() < 1e-6);
        assert!((Curve::AccelerateDecelerate.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = Curve::AccelerateDecelerate.apply(i as f32 / 100.0);
            assert!(v + 1e-6 >= last, "curve decreased at step {}", i);
            last = v;
        }
    }

    #[test]
    fn test_tween_starts_and_lands() {
        let start = Instant::now();
        let tween = Tween::new(10.0, 60.0, start, MS_300);

        assert_eq!(tween.value_at(start), 10.0);
        assert!(!tween.is_finished(start));
        assert_eq!(tween.value_at(start + MS_300), 60.0);
        assert!(tween.is_finished(start + MS_300));
        // Past the end stays on the target
        assert_eq!(tween.value_at(start + MS_300 * 3), 60.0);
    }

    #[test]
    fn test_tween_midpoint_and_eased_ends() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 100.0, start, MS_300);

        let mid = tween.value_at(start + Duration::from_millis(150));
        assert!((mid - 50.0).abs() < 0.01);

        // Eased: less than linear early, more than linear late
        assert!(tween.value_at(start + Duration::from_millis(60)) < 20.0);
        assert!(tween.value_at(start + Duration::from_millis(240)) > 80.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, start, Duration::ZERO);
        assert!(tween.is_finished(start));
        assert_eq!(tween.value_at(start), 1.0);
    }
}
