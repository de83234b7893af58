//! Square measurement and derived rectangles for the play button

use iced::{Point, Rectangle, Size};

/// Side used when neither axis has a finite bound
pub const FALLBACK_SIDE: f32 = 200.0;

/// Degrees per percent of progress
const DEGREES_PER_PERCENT: f32 = 3.6;

/// Given % calculates the progress sweep angle in degrees.
///
/// Progress 100 maps to 360. No clamping or rounding.
pub fn sweep_angle(progress: f32) -> f32 {
    progress * DEGREES_PER_PERCENT
}

/// Side of the square for the proposed size
///
/// Takes the smaller axis. An unbounded axis defers to the other one.
pub fn square_side(proposed: Size) -> f32 {
    match (proposed.width.is_finite(), proposed.height.is_finite()) {
        (true, true) => proposed.width.min(proposed.height),
        (true, false) => proposed.width,
        (false, true) => proposed.height,
        (false, false) => FALLBACK_SIDE,
    }
}

/// Round a rectangle outward to integer pixel bounds
fn round_out(rect: Rectangle) -> Rectangle {
    let left = rect.x.floor();
    let top = rect.y.floor();
    let right = (rect.x + rect.width).ceil();
    let bottom = (rect.y + rect.height).ceil();

    Rectangle::new(Point::new(left, top), Size::new(right - left, bottom - top))
}

/// Result of one measure pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Measured side of the square widget
    pub side: f32,
    /// Rectangle the progress arc follows
    pub progress_rect: Rectangle,
    /// Shared bounds of both glyphs
    pub glyph_bounds: Rectangle,
}

impl Layout {
    /// Measure a square inside `proposed`, with the ring inset by `stroke`
    /// on every side.
    pub fn measure(proposed: Size, stroke: f32) -> Self {
        let side = square_side(proposed);
        // Collapses to an empty rect when the strokes don't fit
        let extent = (side - 2.0 * stroke).max(0.0);
        let progress_rect = Rectangle::new(Point::new(stroke, stroke), Size::new(extent, extent));

        Self {
            side,
            progress_rect,
            glyph_bounds: round_out(progress_rect),
        }
    }

    /// Center of the ring
    pub fn center(&self) -> Point {
        self.progress_rect.center()
    }

    /// Radius of the ring (half the progress rect width)
    pub fn radius(&self) -> f32 {
        self.progress_rect.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_angle_endpoints() {
        assert_eq!(sweep_angle(0.0), 0.0);
        assert_eq!(sweep_angle(100.0), 360.0);
        assert_eq!(sweep_angle(50.0), 180.0);
    }

    #[test]
    fn test_sweep_angle_is_linear_and_monotonic() {
        let mut last = sweep_angle(0.0);
        for i in 0..=400 {
            let p = i as f32 * 0.25;
            let angle = sweep_angle(p);
            assert_eq!(angle, p * 3.6);
            assert!(angle >= last);
            last = angle;
        }
    }

    #[test]
    fn test_sweep_angle_out_of_range_is_not_clamped() {
        assert_eq!(sweep_angle(150.0), 150.0 * 3.6);
        assert_eq!(sweep_angle(-10.0), -36.0);
    }

    #[test]
    fn test_measure_takes_smaller_axis() {
        let layout = Layout::measure(Size::new(300.0, 200.0), 8.0);
        assert_eq!(layout.side, 200.0);

        let layout = Layout::measure(Size::new(120.0, 480.0), 8.0);
        assert_eq!(layout.side, 120.0);
    }

    #[test]
    fn test_measure_unbounded_axes() {
        assert_eq!(square_side(Size::new(f32::INFINITY, 90.0)), 90.0);
        assert_eq!(square_side(Size::new(90.0, f32::INFINITY)), 90.0);
        assert_eq!(square_side(Size::INFINITE), FALLBACK_SIDE);
    }

    #[test]
    fn test_progress_rect_inset_by_stroke() {
        let layout = Layout::measure(Size::new(300.0, 200.0), 8.0);
        let rect = layout.progress_rect;

        assert_eq!(rect.x, 8.0);
        assert_eq!(rect.y, 8.0);
        assert_eq!(rect.x + rect.width, 192.0);
        assert_eq!(rect.y + rect.height, 192.0);
        assert_eq!(layout.center(), Point::new(100.0, 100.0));
        assert_eq!(layout.radius(), 92.0);
    }

    #[test]
    fn test_glyph_bounds_round_out() {
        // Fractional stroke (2.5dp at 1.5x density)
        let layout = Layout::measure(Size::new(101.0, 101.0), 3.75);
        let glyph = layout.glyph_bounds;

        assert_eq!(glyph.x, 3.0);
        assert_eq!(glyph.y, 3.0);
        // 101 - 3.75 = 97.25, rounded out to 98
        assert_eq!(glyph.x + glyph.width, 98.0);
        assert_eq!(glyph.y + glyph.height, 98.0);

        // Integral stroke: rounding out is the identity
        let layout = Layout::measure(Size::new(300.0, 200.0), 8.0);
        assert_eq!(layout.glyph_bounds, layout.progress_rect);
    }

    #[test]
    fn test_stroke_wider_than_half_the_side() {
        let layout = Layout::measure(Size::new(10.0, 10.0), 8.0);

        assert_eq!(layout.side, 10.0);
        assert_eq!(layout.progress_rect.width, 0.0);
        assert_eq!(layout.progress_rect.height, 0.0);
        assert_eq!(layout.radius(), 0.0);
        assert_eq!(layout.glyph_bounds.width, 0.0);
        assert_eq!(layout.glyph_bounds.height, 0.0);
    }
}
