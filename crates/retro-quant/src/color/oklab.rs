//! Oklab perceptual color space
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::rgb::Rgb;

/// A color in Oklab perceptual color space.
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis
/// - `b`: Blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Oklab space.
    ///
    /// ```
    /// use retro_quant::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert!((gray.distance(black) - gray.distance(white)).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn distance(self, other: Oklab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// IEC 61966-2-1 sRGB decode. Input is clamped to 0..=1 first, so dithered
/// channels above 1.0 decode as white.
#[inline]
fn srgb_to_linear(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Rgb> for Oklab {
    /// Convert gamma-encoded RGB to Oklab (2021-01-25 matrices).
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white_lightness() {
        let black = Oklab::from(Rgb::new(0.0, 0.0, 0.0));
        let white = Oklab::from(Rgb::new(1.0, 1.0, 1.0));
        assert!(black.l.abs() < 1e-4);
        assert!((white.l - 1.0).abs() < 1e-3);
        assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
    }

    #[test]
    fn test_greys_are_achromatic() {
        for i in 0..=10 {
            let v = i as f32 / 10.0;
            let lab = Oklab::from(Rgb::new(v, v, v));
            assert!(lab.a.abs() < 1e-3, "grey {v} has a={}", lab.a);
            assert!(lab.b.abs() < 1e-3, "grey {v} has b={}", lab.b);
        }
    }

    #[test]
    fn test_overbright_input_saturates() {
        let white = Oklab::from(Rgb::new(1.0, 1.0, 1.0));
        let hot = Oklab::from(Rgb::new(1.2, 1.2, 1.2));
        assert_eq!(white, hot);
    }
}
