use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::GlyphError;

/// 8-bit RGBA colour with straight (non-premultiplied) alpha.
///
/// `#[repr(C)]` so pixel buffers of `Rgba` can be handed to GPU or image
/// APIs as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, GlyphError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || GlyphError::InvalidColour(hex.to_owned());
        // `from_str_radix` alone would accept a leading `+`.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                // Each nibble is doubled: "f80" -> "ff8800".
                let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// This colour with its alpha scaled by a coverage value (0–255).
    pub fn with_coverage(self, coverage: u8) -> Self {
        let a = (self.a as u16 * coverage as u16 + 127) / 255;
        Self { a: a as u8, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long() {
        assert_eq!(Rgba::from_hex("#ff8800").unwrap(), Rgba::rgb(255, 136, 0));
        assert_eq!(Rgba::from_hex("102030").unwrap(), Rgba::rgb(16, 32, 48));
        assert_eq!(
            Rgba::from_hex("#10203040").unwrap(),
            Rgba::new(16, 32, 48, 64)
        );
    }

    #[test]
    fn test_from_hex_short() {
        assert_eq!(Rgba::from_hex("#f80").unwrap(), Rgba::rgb(255, 136, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        for bad in [
            "", "#", "#12", "#12345", "#gggggg", "#ff88001", "#ééé", "#+f+f+f", "+f8", "#-1-1-1",
        ] {
            assert!(
                matches!(Rgba::from_hex(bad), Err(GlyphError::InvalidColour(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_with_coverage() {
        let red = Rgba::rgb(255, 0, 0);
        assert_eq!(red.with_coverage(255), red);
        assert_eq!(red.with_coverage(0).a, 0);
        assert_eq!(red.with_coverage(128).a, 128);

        let half = Rgba::new(0, 0, 255, 128);
        assert_eq!(half.with_coverage(255).a, 128);
        assert_eq!(half.with_coverage(128).a, 64);
    }

    #[test]
    fn test_pod_layout() {
        let pixels = [Rgba::new(1, 2, 3, 4), Rgba::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Rgba::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":255}"#);
    }
}
