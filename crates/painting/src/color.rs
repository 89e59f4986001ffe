//! Color string parsing
//!
//! Accepts the platform color syntax the palette buttons use: `#RRGGBB`,
//! `#AARRGGBB`, or one of a fixed set of color names.

use crate::error::CanvasError;
use crate::types::Color;

/// Named colors, packed as `0xAARRGGBB`
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

/// Parse a color string
pub fn parse_color(input: &str) -> Result<Color, CanvasError> {
    let trimmed = input.trim();
    let invalid = || CanvasError::InvalidColor(input.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            6 => Ok(Color::from_argb(0xFF00_0000 | value)),
            8 => Ok(Color::from_argb(value)),
            _ => Err(invalid()),
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, argb)| Color::from_argb(argb))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rrggbb() {
        assert_eq!(parse_color("#FF8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(parse_color("#0a0B0c").unwrap(), Color::rgb(10, 11, 12));
    }

    #[test]
    fn test_parse_aarrggbb() {
        assert_eq!(
            parse_color("#80112233").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x80)
        );
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(parse_color("  Teal ").unwrap(), Color::rgb(0, 128, 128));
        assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "#", "#FFF", "#GG0000", "#+FFFFF", "not-a-color", "#FF00000"] {
            match parse_color(input) {
                Err(CanvasError::InvalidColor(reported)) => assert_eq!(reported, input),
                other => panic!("expected InvalidColor for {input:?}, got {other:?}"),
            }
        }
    }
}
