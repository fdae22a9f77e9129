//! Saturation boost followed by per-channel level quantization

use crate::color::{Rgb, to_hsl, to_rgb};
use crate::math::stats::clamp01;
use crate::raster::buffer::PixelBuffer;

/// Posterize every pixel of `source` into `levels` evenly spaced steps per channel
///
/// Saturation is first pushed toward 1 by `boost` (`s' = s + boost * (1 - s)`),
/// then each RGB channel snaps to the nearest multiple of `255 / (levels - 1)`.
/// Level counts below two are treated as two. Alpha is untouched.
pub fn posterize(source: &PixelBuffer, levels: u32, boost: f64) -> PixelBuffer {
    let levels = levels.max(2);
    let step = 255.0 / f64::from(levels - 1);
    let boost = clamp01(boost);

    source.map_rgb(|color| {
        let boosted = boost_saturation(color, boost);
        Rgb::new(
            quantize_channel(boosted.r, step),
            quantize_channel(boosted.g, step),
            quantize_channel(boosted.b, step),
        )
    })
}

/// Raise saturation toward full by the fraction `boost`
pub fn boost_saturation(color: Rgb, boost: f64) -> Rgb {
    if boost <= 0.0 {
        return color;
    }
    let mut hsl = to_hsl(color);
    hsl.s = clamp01(hsl.s + boost * (1.0 - hsl.s));
    to_rgb(hsl)
}

/// Snap a channel to the nearest multiple of `step`
pub fn quantize_channel(value: u8, step: f64) -> u8 {
    let snapped = (f64::from(value) / step).round() * step;
    snapped.round().clamp(0.0, 255.0) as u8
}
