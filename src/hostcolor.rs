use std::fmt;
use std::str::FromStr;

use crate::error::StrobeError;

/// A color as the RGB matrix passes it to scripts: `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostColor(pub u32);

impl HostColor {
    pub const OFF: HostColor = HostColor(0);

    /// Accepts `#rrggbb`, `rrggbb`, `0xrrggbb` and the short `#rgb` form.
    pub fn from_hex(text: &str) -> Result<HostColor, StrobeError> {
        let trimmed = text.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        match palette::Srgb::<u8>::from_str(hex) {
            Ok(rgb) => Ok(HostColor::from(rgb)),
            Err(err) => Err(StrobeError::InvalidColor(format!("{}: {}", text, err))),
        }
    }

    pub fn is_off(&self) -> bool {
        self.0 & 0x00ff_ffff == 0
    }
}

impl From<palette::Srgb<u8>> for HostColor {
    fn from(rgb: palette::Srgb<u8>) -> Self {
        let (r, g, b) = rgb.into_components();
        HostColor((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }
}

impl From<HostColor> for palette::Srgb<u8> {
    fn from(color: HostColor) -> Self {
        let r = (color.0 >> 16) as u8;
        let g = (color.0 >> 8) as u8;
        let b = color.0 as u8;
        palette::Srgb::new(r, g, b)
    }
}

impl From<HostColor> for json::JsonValue {
    fn from(color: HostColor) -> Self {
        color.0.into()
    }
}

impl fmt::Display for HostColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_variants() {
        assert_eq!(HostColor::from_hex("#ff8800").unwrap(), HostColor(0xff8800));
        assert_eq!(HostColor::from_hex("ff8800").unwrap(), HostColor(0xff8800));
        assert_eq!(HostColor::from_hex("0x00ff00").unwrap(), HostColor(0x00ff00));
        assert_eq!(HostColor::from_hex(" #0000ff ").unwrap(), HostColor(0x0000ff));
    }

    #[test]
    fn rejects_garbage() {
        match HostColor::from_hex("red") {
            Err(StrobeError::InvalidColor(msg)) => assert!(msg.starts_with("red")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn converts_through_palette() {
        let rgb: palette::Srgb<u8> = HostColor(0x123456).into();
        assert_eq!(rgb.into_components(), (0x12, 0x34, 0x56));
        assert_eq!(HostColor::from(rgb), HostColor(0x123456));
    }

    #[test]
    fn formats_as_hex() {
        assert_eq!(HostColor(0xabcdef).to_string(), "#abcdef");
        assert!(HostColor::OFF.is_off());
        assert!(!HostColor(0x010000).is_off());
    }
}
