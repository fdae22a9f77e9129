//! Remap colors onto a fixed palette

use crate::color::Rgb;
use crate::raster::buffer::PixelBuffer;

/// Palette entry closest to `color` by squared RGB distance
///
/// Ties go to the earlier entry. Returns `None` for an empty palette.
pub fn nearest_color(color: Rgb, palette: &[Rgb]) -> Option<Rgb> {
    palette
        .iter()
        .copied()
        .min_by_key(|candidate| color.distance_sq(*candidate))
}

/// Replace every pixel's color with its nearest palette entry
///
/// Alpha is untouched. An empty palette yields an unchanged copy.
pub fn transfer_palette(source: &PixelBuffer, palette: &[Rgb]) -> PixelBuffer {
    if palette.is_empty() {
        return source.clone();
    }
    source.map_rgb(|color| nearest_color(color, palette).unwrap_or(color))
}
