//! Procedural decorative motifs: wave crests, flame tongues and spirals
//!
//! Waves are laid out deterministically. Flames and spirals draw their
//! heights, wobble, placement and size from the supplied random source, so
//! each invocation looks different unless the caller pins the generator.

use crate::io::configuration::{
    FLAME_BASELINE, SPIRAL_STEPS, SPIRAL_STROKE_WIDTH, SPIRAL_TURNS, WAVE_STEPS, WAVE_STROKE_WIDTH,
    WAVE_TIGHTNESS,
};
use crate::pipeline::params::MotifPack;
use crate::synth::layer::{InkShape, draw_shapes, ink, polyline};
use rand::Rng;
use std::f32::consts::{PI, TAU};
use tiny_skia::{BlendMode, PathBuilder, Pixmap};

/// Number of shapes `pack` produces at `intensity`
pub fn shape_count(pack: MotifPack, intensity: f64) -> usize {
    let intensity = intensity.clamp(0.0, 1.0);
    match pack {
        MotifPack::None => 0,
        MotifPack::Waves => 3 + (intensity * 5.0).floor() as usize,
        MotifPack::Flames => 25 + (intensity * 40.0).floor() as usize,
        MotifPack::Psychedelia => 4 + (intensity * 6.0).floor() as usize,
    }
}

/// Generate the shapes of `pack` for a `width` x `height` canvas
pub fn motif_shapes<R: Rng>(
    pack: MotifPack,
    width: u32,
    height: u32,
    intensity: f64,
    rng: &mut R,
) -> Vec<InkShape> {
    let count = shape_count(pack, intensity);
    let (w, h) = (width as f32, height as f32);
    match pack {
        MotifPack::None => Vec::new(),
        MotifPack::Waves => wave_crests(count, w, h),
        MotifPack::Flames => flame_tongues(count, w, h, rng),
        MotifPack::Psychedelia => spirals(count, w, h, rng),
    }
}

/// Multiply the selected motif onto `target` at `0.4 * intensity` opacity
pub fn draw_motifs<R: Rng>(target: &mut Pixmap, pack: MotifPack, intensity: f64, rng: &mut R) {
    let shapes = motif_shapes(pack, target.width(), target.height(), intensity, rng);
    if shapes.is_empty() {
        return;
    }
    let paint = ink((0.4 * intensity.clamp(0.0, 1.0)) as f32, BlendMode::Multiply);
    draw_shapes(target, &shapes, &paint);
}

// Curling crests spread evenly across the lower half of the canvas
fn wave_crests(count: usize, w: f32, h: f32) -> Vec<InkShape> {
    let slot = w / count as f32;
    let radius = slot.min(h * 0.4) * 0.45;
    let start = 0.2 * PI;
    let sweep = 1.2 * PI;

    (0..count)
        .filter_map(|i| {
            let cx = slot * (i as f32 + 0.5);
            let cy = if i % 2 == 0 { h * 0.62 } else { h * 0.7 };
            let points: Vec<(f32, f32)> = (0..WAVE_STEPS)
                .map(|step| {
                    let t = step as f32 / WAVE_STEPS as f32;
                    let angle = start + sweep * t;
                    let r = radius * (1.0 - t);
                    let (sin, cos) = angle.sin_cos();
                    (cx + cos * r, cy - sin * r * WAVE_TIGHTNESS)
                })
                .collect();
            polyline(&points)
        })
        .map(|path| InkShape::Stroke {
            path,
            width: WAVE_STROKE_WIDTH,
        })
        .collect()
}

// Closed bezier tongues rising from a common baseline
fn flame_tongues<R: Rng>(count: usize, w: f32, h: f32, rng: &mut R) -> Vec<InkShape> {
    let slot = w / count as f32;
    let half_width = slot * 0.6;
    let base = h * FLAME_BASELINE;

    (0..count)
        .filter_map(|i| {
            let x = slot * (i as f32 + 0.5);
            let height = h * rng.random_range(0.2..0.45);
            let wobble = slot * rng.random_range(-0.8..0.8);
            let tip = (x + wobble, base - height);

            let mut pb = PathBuilder::new();
            pb.move_to(x - half_width, base);
            pb.cubic_to(
                x - half_width,
                base - height * 0.5,
                tip.0 - half_width * 0.4,
                base - height * 0.8,
                tip.0,
                tip.1,
            );
            pb.cubic_to(
                tip.0 + half_width * 0.4,
                base - height * 0.8,
                x + half_width,
                base - height * 0.5,
                x + half_width,
                base,
            );
            pb.close();
            pb.finish()
        })
        .map(|path| InkShape::Fill { path })
        .collect()
}

// Spirals widening outward from jittered quadrant anchors
fn spirals<R: Rng>(count: usize, w: f32, h: f32, rng: &mut R) -> Vec<InkShape> {
    let anchors = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
    let short_side = w.min(h);
    let growth = 2.0_f32;
    let growth_norm = growth.exp() - 1.0;

    anchors
        .iter()
        .cycle()
        .take(count)
        .filter_map(|&(ax, ay)| {
            let cx = w * (ax + rng.random_range(-0.1..0.1));
            let cy = h * (ay + rng.random_range(-0.1..0.1));
            let max_radius = short_side * rng.random_range(0.15..0.35);
            let phase = rng.random_range(0.0..TAU);

            let points: Vec<(f32, f32)> = (0..=SPIRAL_STEPS)
                .map(|step| {
                    let t = step as f32 / SPIRAL_STEPS as f32;
                    let angle = phase + t * SPIRAL_TURNS * TAU;
                    let r = max_radius * ((growth * t).exp() - 1.0) / growth_norm;
                    let (sin, cos) = angle.sin_cos();
                    (cx + cos * r, cy + sin * r)
                })
                .collect();
            polyline(&points)
        })
        .map(|path| InkShape::Stroke {
            path,
            width: SPIRAL_STROKE_WIDTH,
        })
        .collect()
}
