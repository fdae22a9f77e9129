//! Color representations and color-space conversion

/// RGB/HSL conversion and luminance
pub mod space;

pub use space::{Hsl, Rgb, luminance, to_hsl, to_rgb};
