//! Circular progress arc
//!
//! Strokes the progress arc of the play button into a canvas frame. The arc
//! follows the circle inscribed in a rectangle, starts at 12 o'clock and
//! sweeps clockwise.

use iced::widget::canvas::path::Arc;
use iced::widget::canvas::{Frame, LineCap, LineJoin, Path, Stroke};
use iced::{Color, Degrees, Radians, Rectangle};

use super::play_button::sweep_angle;

/// Arc start, 12 o'clock in canvas angle convention
const START_ANGLE: Degrees = Degrees(-90.0);

/// Progress ring configuration
#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Progress percent (0.0 - 100.0)
    pub progress: f32,
    /// Ring stroke width in pixels
    pub stroke_width: f32,
    /// Progress arc color
    pub progress_color: Color,
}

impl ProgressRing {
    pub fn new(progress: f32) -> Self {
        Self {
            progress,
            stroke_width: 1.0,
            progress_color: Color::BLACK,
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    /// Arc geometry for `rect`, `None` when there is nothing to sweep
    fn arc(&self, rect: Rectangle) -> Option<Arc> {
        let sweep = sweep_angle(self.progress);
        if sweep == 0.0 {
            return None;
        }

        let start = Radians::from(START_ANGLE);
        let end = Radians::from(Degrees(START_ANGLE.0 + sweep));

        Some(Arc {
            center: rect.center(),
            radius: rect.width.min(rect.height) / 2.0,
            start_angle: start,
            end_angle: end,
        })
    }

    /// Stroke the arc for the current progress inside `rect`
    pub fn draw(&self, frame: &mut Frame, rect: Rectangle) {
        let Some(arc) = self.arc(rect) else {
            return;
        };

        let path = Path::new(move |builder| {
            builder.arc(arc);
        });
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.progress_color)
                .with_line_cap(LineCap::Round)
                .with_line_join(LineJoin::Round),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn rect() -> Rectangle {
        Rectangle::new(Point::new(8.0, 8.0), Size::new(184.0, 184.0))
    }

    #[test]
    fn test_empty_progress_has_no_arc() {
        assert!(ProgressRing::new(0.0).arc(rect()).is_none());
    }

    #[test]
    fn test_arc_starts_at_twelve_oclock() {
        let arc = ProgressRing::new(25.0).arc(rect()).unwrap();

        assert_eq!(arc.center, Point::new(100.0, 100.0));
        assert_eq!(arc.radius, 92.0);
        assert!((arc.start_angle.0 + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        // A quarter turn clockwise ends at 3 o'clock
        assert!(arc.end_angle.0.abs() < 1e-5);
    }

    #[test]
    fn test_full_progress_is_full_circle() {
        let arc = ProgressRing::new(100.0).arc(rect()).unwrap();
        let sweep = arc.end_angle.0 - arc.start_angle.0;
        assert!((sweep - std::f32::consts::TAU).abs() < 1e-4);
    }
}
