//! Floating point RGB color type
//!
//! Channels are gamma-encoded (sRGB) values in the nominal range 0.0..=1.0.
//! Dithering may push channels above 1.0; that is tolerated everywhere
//! because nearest-color search copes with out-of-range input.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with floating point channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (nominally 0.0..=1.0)
    pub r: f32,
    /// Green channel (nominally 0.0..=1.0)
    pub g: f32,
    /// Blue channel (nominally 0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// ```
    /// use retro_quant::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to `[R, G, B]` bytes, rounding and clamping to 0..=255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Add `offset` to every channel, flooring each channel at zero.
    ///
    /// There is no ceiling: a channel may exceed 1.0.
    #[inline]
    pub fn offset_floor_zero(self, offset: f32) -> Self {
        Self {
            r: (self.r + offset).max(0.0),
            g: (self.g + offset).max(0.0),
            b: (self.b + offset).max(0.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
    ///
    /// ```
    /// use retro_quant::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_conversions() {
        let color = Rgb::from_u8(255, 128, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);

        assert_eq!(Rgb::from_bytes([255, 128, 0]), color);
        assert_eq!(color.to_bytes(), [255, 128, 0]);
    }

    #[test]
    fn test_to_bytes_clamps_out_of_range() {
        let hot = Rgb::new(1.3, -0.2, 0.5);
        assert_eq!(hot.to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn test_offset_floors_at_zero_only() {
        let c = Rgb::new(0.02, 0.5, 0.98);
        let down = c.offset_floor_zero(-0.05);
        assert_eq!(down.r, 0.0);
        assert!((down.g - 0.45).abs() < 1e-6);

        let up = c.offset_floor_zero(0.05);
        assert!(up.b > 1.0, "no ceiling clamp expected, got {}", up.b);
    }

    #[test]
    fn test_parse_hex_formats() {
        assert_eq!("#000000".parse::<Rgb>().unwrap().to_bytes(), [0, 0, 0]);
        assert_eq!("813338".parse::<Rgb>().unwrap().to_bytes(), [0x81, 0x33, 0x38]);
        assert_eq!("#abc".parse::<Rgb>().unwrap().to_bytes(), [0xaa, 0xbb, 0xcc]);
        assert_eq!("  #FFFFFF ".parse::<Rgb>().unwrap().to_bytes(), [255, 255, 255]);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            "#12345".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#é0".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }
}
