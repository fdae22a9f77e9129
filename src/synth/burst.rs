//! Radial sunburst rays from the canvas center

use crate::io::configuration::{
    BURST_BASE_RAYS, BURST_EXTRA_RAYS, BURST_INNER_RADIUS, BURST_MIN_STRENGTH, BURST_RAY_WIDTH,
};
use crate::synth::layer::{InkShape, draw_shapes, ink, polyline};
use std::f32::consts::TAU;
use tiny_skia::{BlendMode, Pixmap};

/// Number of rays drawn at `strength`, zero when the burst is switched off
pub fn ray_count(strength: f64) -> usize {
    if strength <= BURST_MIN_STRENGTH {
        return 0;
    }
    BURST_BASE_RAYS + (BURST_EXTRA_RAYS * strength.min(1.0)).floor() as usize
}

/// Ray segments for a `width` x `height` canvas
///
/// Rays are evenly spaced in angle, start `BURST_INNER_RADIUS` from the
/// center and reach as far as the longer canvas side.
pub fn rays(width: u32, height: u32, strength: f64) -> Vec<InkShape> {
    let count = ray_count(strength);
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let outer = width.max(height) as f32;

    (0..count)
        .filter_map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            polyline(&[
                (cx + cos * BURST_INNER_RADIUS, cy + sin * BURST_INNER_RADIUS),
                (cx + cos * outer, cy + sin * outer),
            ])
        })
        .map(|path| InkShape::Stroke {
            path,
            width: BURST_RAY_WIDTH,
        })
        .collect()
}

/// Multiply the burst onto `target`; no-op at negligible strength
pub fn draw_burst(target: &mut Pixmap, strength: f64) {
    let shapes = rays(target.width(), target.height(), strength);
    if shapes.is_empty() {
        return;
    }
    let paint = ink((0.25 * strength.min(1.0)) as f32, BlendMode::Multiply);
    draw_shapes(target, &shapes, &paint);
}
