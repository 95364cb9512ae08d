//! Color distance metrics used for nearest-color search.

use super::{Oklab, Rgb};

/// Distance function for palette matching.
///
/// A palette carries exactly one metric; every nearest-color query against
/// that palette uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Euclidean distance over the gamma-encoded RGB channels.
    #[default]
    Rgb,
    /// Euclidean distance in Oklab.
    Oklab,
}

impl DistanceMetric {
    /// Distance between two colors. Always non-negative and finite for finite input.
    #[inline]
    pub fn distance(self, a: Rgb, b: Rgb) -> f32 {
        match self {
            DistanceMetric::Rgb => {
                let dr = a.r - b.r;
                let dg = a.g - b.g;
                let db = a.b - b.b;
                (dr * dr + dg * dg + db * db).sqrt()
            }
            DistanceMetric::Oklab => Oklab::from(a).distance(Oklab::from(b)),
        }
    }

    /// Parse a metric name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Some(DistanceMetric::Rgb),
            "oklab" => Some(DistanceMetric::Oklab),
            _ => None,
        }
    }
}
