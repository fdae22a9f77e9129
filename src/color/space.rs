//! RGB and HSL color representations and conversions between them
//!
//! Every stage that adjusts saturation or classifies hue goes through these
//! conversions, so they are total: any 8-bit color maps to a valid HSL triple
//! and back to within one unit per channel.

use serde::{Deserialize, Serialize};

/// Rec. 709 luma weights used for all luminance measurements
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// An 8-bit sRGB color without alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceptual luminance on the 0..=255 scale
    pub fn luminance(self) -> f64 {
        luminance(self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_sq(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// A color in hue/saturation/lightness form, each component in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

/// Perceptual luminance of raw channels on the 0..=255 scale
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b)
}

/// Convert an RGB color to HSL
///
/// Achromatic colors (all channels equal) produce zero hue and zero saturation.
pub fn to_hsl(color: Rgb) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if color.r == color.g && color.g == color.b {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}

/// Convert an HSL color back to RGB, rounding each channel
pub fn to_rgb(color: Hsl) -> Rgb {
    let s = color.s.clamp(0.0, 1.0);
    let l = color.l.clamp(0.0, 1.0);

    if s <= 0.0 {
        let v = unit_to_channel(l);
        return Rgb::new(v, v, v);
    }

    let h = color.h.rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_channel(p, q, h)),
        unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
