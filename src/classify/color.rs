//! Base-color → named color bucket classification.
//!
//! Works in HSL space: low-saturation colors split into black/white/grey
//! by lightness, everything else lands in one of six 60°-wide hue bins
//! centered on the primary and secondary hues.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Saturation below which a color is treated as achromatic.
const SATURATION_FLOOR: f32 = 0.2;
/// Achromatic lightness bounds for the black and white buckets.
const BLACK_LIGHTNESS: f32 = 0.2;
const WHITE_LIGHTNESS: f32 = 0.8;

/// Named bucket a part's base color classifies into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    /// Dark achromatic colors.
    Black,
    /// Hues around 240°.
    Blue,
    /// Hues around 180°.
    Cyan,
    /// Hues around 120°.
    Green,
    /// Mid-lightness achromatic colors; also the tie-break default.
    Grey,
    /// Hues around 300°.
    Magenta,
    /// Hues around 0°, wrapping across 360°.
    Red,
    /// Bright achromatic colors.
    White,
    /// Hues around 60°.
    Yellow,
    /// Colors that cannot be classified (non-finite components).
    Unknown,
}

/// Classifies a base color into its bucket.
///
/// Deterministic and total: achromatic ties fall to [`ColorBucket::Grey`],
/// non-finite components fall to [`ColorBucket::Unknown`].
#[must_use]
pub fn classify_color(rgb: [f32; 3]) -> ColorBucket {
    let [r, g, b] = rgb;
    if !r.is_finite() || !g.is_finite() || !b.is_finite() {
        return ColorBucket::Unknown;
    }
    let (hue, saturation, lightness) = rgb_to_hsl(r, g, b);
    if saturation < SATURATION_FLOOR {
        return if lightness < BLACK_LIGHTNESS {
            ColorBucket::Black
        } else if lightness > WHITE_LIGHTNESS {
            ColorBucket::White
        } else {
            ColorBucket::Grey
        };
    }
    // Half-sextant shift so red owns ±30° around the 0°/360° wrap.
    match (((hue + 30.0) % 360.0) / 60.0) as u32 {
        0 => ColorBucket::Red,
        1 => ColorBucket::Yellow,
        2 => ColorBucket::Green,
        3 => ColorBucket::Cyan,
        4 => ColorBucket::Blue,
        _ => ColorBucket::Magenta,
    }
}

/// RGB in [0, 1] → (hue in degrees, saturation, lightness).
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) * 0.5;
    let delta = max - min;
    if delta <= f32::EPSILON {
        return (0.0, 0.0, lightness);
    }
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    ((hue * 60.0).rem_euclid(360.0), saturation, lightness)
}
