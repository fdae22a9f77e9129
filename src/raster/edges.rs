//! Sobel edge extraction into an alpha mask, plus soft thickening for inking

use crate::color::luminance;
use crate::io::error::Result;
use crate::math::stats::clamp_range;
use crate::raster::buffer::PixelBuffer;
use ndarray::Array2;

/// Luminance field indexed `[row, col]`
pub fn luminance_field(source: &PixelBuffer) -> Array2<f64> {
    let (width, height) = source.dimensions();
    let mut field = Array2::zeros((height as usize, width as usize));
    for (index, [r, g, b, _]) in source.pixels().enumerate() {
        let row = index / width as usize;
        let col = index % width as usize;
        if let Some(cell) = field.get_mut([row, col]) {
            *cell = luminance(r, g, b);
        }
    }
    field
}

/// Sobel gradient magnitude at interior cells; border cells stay zero
///
/// Each gradient is the difference of two weighted sums over opposite sides
/// of the 3x3 neighbourhood, so a flat neighbourhood gives exactly zero.
pub fn gradient_magnitude(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    let mut magnitude = Array2::zeros((rows, cols));
    if rows < 3 || cols < 3 {
        return magnitude;
    }

    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            let at = |dr: usize, dc: usize| {
                field
                    .get([row + dr - 1, col + dc - 1])
                    .copied()
                    .unwrap_or(0.0)
            };
            let gx = (at(0, 2) + 2.0 * at(1, 2) + at(2, 2)) - (at(0, 0) + 2.0 * at(1, 0) + at(2, 0));
            let gy = (at(2, 0) + 2.0 * at(2, 1) + at(2, 2)) - (at(0, 0) + 2.0 * at(0, 1) + at(0, 2));
            if let Some(cell) = magnitude.get_mut([row, col]) {
                *cell = gx.hypot(gy);
            }
        }
    }
    magnitude
}

/// Mark pixels whose luminance gradient exceeds `threshold`
///
/// The result is black everywhere with alpha 255 on edges and 0 elsewhere.
/// The outermost row and column on each side are never evaluated and stay
/// unmarked.
pub fn detect_edges(source: &PixelBuffer, threshold: f64) -> PixelBuffer {
    let magnitude = gradient_magnitude(&luminance_field(source));
    let mut data = vec![0u8; source.pixel_count() * 4];
    for (px, &m) in data.chunks_exact_mut(4).zip(magnitude.iter()) {
        if let [_, _, _, alpha] = px
            && m > threshold
        {
            *alpha = 255;
        }
    }
    source.derive(data)
}

/// Fraction of all pixels marked as edge in `mask`
pub fn edge_density(mask: &PixelBuffer) -> f64 {
    let marked = mask.pixels().filter(|&[_, _, _, alpha]| alpha > 0).count();
    marked as f64 / mask.pixel_count() as f64
}

/// Blur radius used to thicken ink lines for a given outline weight
pub fn thickening_radius(outline_weight: f64) -> u32 {
    clamp_range(1.0 + outline_weight * 3.0, 1.0, 4.0).round() as u32
}

/// Spread an edge mask into soft, thicker ink lines
///
/// The mask's alpha is Gaussian blurred with `sigma = radius`, then boosted by
/// `2 * radius + 1` so that any coverage picked up near a line becomes solid
/// and only the rim fades out.
///
/// # Errors
///
/// Returns an error if the blurred image cannot be rewrapped as a buffer
pub fn thicken(mask: &PixelBuffer, outline_weight: f64) -> Result<PixelBuffer> {
    let radius = thickening_radius(outline_weight);
    let gain = 2 * radius + 1;
    let blurred = image::imageops::blur(&mask.to_rgba_image(), radius as f32);
    let mut thick = PixelBuffer::from_rgba_image(blurred)?.into_bytes();
    for px in thick.chunks_exact_mut(4) {
        if let [r, g, b, alpha] = px {
            (*r, *g, *b) = (0, 0, 0);
            *alpha = (u32::from(*alpha) * gain).min(255) as u8;
        }
    }
    Ok(mask.derive(thick))
}
