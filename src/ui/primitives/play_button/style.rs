//! Construction-time style of the play button

use iced::Color;
use serde::{Deserialize, Serialize};

use super::ButtonState;

/// Default ring stroke width in density-independent units
pub const DEFAULT_PROGRESS_WIDTH: f32 = 8.0;

/// Style options, read once when the widget is built
///
/// Missing keys fall back to the defaults (8dp stroke, 0% progress,
/// black ring and glyphs, Play state).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayButtonStyle {
    /// Ring stroke width in density-independent units
    pub progress_width: f32,
    /// Initial progress percent
    pub progress: f32,
    #[serde(with = "hex_color")]
    pub progress_color: Color,
    #[serde(with = "hex_color")]
    pub play_button_tint: Color,
    #[serde(with = "hex_color")]
    pub pause_button_tint: Color,
    /// Initial button state
    pub button_state: ButtonState,
}

impl Default for PlayButtonStyle {
    fn default() -> Self {
        Self {
            progress_width: DEFAULT_PROGRESS_WIDTH,
            progress: 0.0,
            progress_color: Color::BLACK,
            play_button_tint: Color::BLACK,
            pause_button_tint: Color::BLACK,
            button_state: ButtonState::Play,
        }
    }
}

/// `#rrggbb` / `#rrggbbaa` colour strings
mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b, a] = color.into_rgba8();
        let hex = if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        };
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid colour '{}'", raw)))
    }

    pub fn parse(raw: &str) -> Option<Color> {
        let hex = raw.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                f32::from(channel(6)?) / 255.0,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let style: PlayButtonStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, PlayButtonStyle::default());
        assert_eq!(style.progress_width, 8.0);
        assert_eq!(style.button_state, ButtonState::Play);
    }

    #[test]
    fn test_partial_config() {
        let json = r##"{"progress_width": 4, "progress_color": "#ff1493", "button_state": 1}"##;
        let style: PlayButtonStyle = serde_json::from_str(json).unwrap();

        assert_eq!(style.progress_width, 4.0);
        assert_eq!(style.progress_color, Color::from_rgb8(0xff, 0x14, 0x93));
        assert_eq!(style.button_state, ButtonState::Pause);
        assert_eq!(style.play_button_tint, Color::BLACK);
        assert_eq!(style.progress, 0.0);
    }

    #[test]
    fn test_hex_colour_parsing() {
        assert_eq!(hex_color::parse("#000000"), Some(Color::BLACK));
        assert_eq!(hex_color::parse("#ffffff"), Some(Color::WHITE));
        assert_eq!(hex_color::parse("#ffffff00").map(|c| c.a), Some(0.0));
        assert_eq!(hex_color::parse("ffffff"), None);
        assert_eq!(hex_color::parse("#fff"), None);
        assert_eq!(hex_color::parse("#gggggg"), None);
    }

    #[test]
    fn test_invalid_colour_is_an_error() {
        let json = r#"{"play_button_tint": "red"}"#;
        assert!(serde_json::from_str::<PlayButtonStyle>(json).is_err());
    }

    #[test]
    fn test_serialized_colours_are_hex() {
        let json = serde_json::to_value(PlayButtonStyle::default()).unwrap();
        assert_eq!(json["progress_color"], "#000000");
        assert_eq!(json["button_state"], 0);
    }
}
