//! Play and pause glyphs as vector paths
//!
//! Shapes follow the 24x24 material icon grid and are scaled to fill the
//! shared glyph bounds.

use iced::widget::canvas::{Frame, Path};
use iced::{Color, Point, Rectangle, Size};

/// Icon grid the glyph coordinates are expressed in
const GRID: f32 = 24.0;

/// Fully transparent glyph alpha
pub const ALPHA_INVISIBLE: u8 = 0;
/// Fully opaque glyph alpha
pub const ALPHA_VISIBLE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    /// Build the glyph path for a region of `size` anchored at the origin
    pub fn path(self, size: Size) -> Path {
        let sx = size.width / GRID;
        let sy = size.height / GRID;
        let at = |x: f32, y: f32| Point::new(x * sx, y * sy);

        match self {
            Self::Play => Path::new(|builder| {
                builder.move_to(at(8.0, 5.0));
                builder.line_to(at(8.0, 19.0));
                builder.line_to(at(19.0, 12.0));
                builder.close();
            }),
            Self::Pause => Path::new(|builder| {
                let bar = Size::new(4.0 * sx, 14.0 * sy);
                builder.rectangle(at(6.0, 5.0), bar);
                builder.rectangle(at(14.0, 5.0), bar);
            }),
        }
    }

    /// Fill the glyph inside `bounds` with `tint` scaled by `alpha` (0-255)
    pub fn draw(self, frame: &mut Frame, bounds: Rectangle, tint: Color, alpha: u8) {
        if alpha == ALPHA_INVISIBLE {
            return;
        }

        let color = tinted(tint, alpha);
        frame.with_clip(bounds, |frame| {
            frame.fill(&self.path(bounds.size()), color);
        });
    }
}

/// Apply a 0-255 alpha on top of the tint's own alpha
pub fn tinted(tint: Color, alpha: u8) -> Color {
    Color {
        a: tint.a * f32::from(alpha) / f32::from(ALPHA_VISIBLE),
        ..tint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tinted_alpha_scaling() {
        let tint = Color::from_rgb(0.2, 0.4, 0.6);

        assert_eq!(tinted(tint, ALPHA_VISIBLE), tint);
        assert_eq!(tinted(tint, ALPHA_INVISIBLE).a, 0.0);

        let half = tinted(Color { a: 0.5, ..tint }, 255);
        assert_eq!(half.a, 0.5);
        assert_eq!(half.r, tint.r);
    }
}
