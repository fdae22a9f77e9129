//! Deterministic dot-grid overlay

use crate::io::configuration::HALFTONE_MAX_SPACING;
use crate::synth::layer::ink;
use tiny_skia::{BlendMode, FillRule, PathBuilder, Pixmap, Transform};

/// Geometry of the halftone dot lattice for one density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalftoneLattice {
    /// Distance between neighbouring dot centers
    pub spacing: u32,
    /// Dot radius
    pub radius: u32,
    /// Opacity the dots are drawn at
    pub opacity: f32,
}

impl HalftoneLattice {
    /// Lattice for `density` in `[0, 0.4]`
    pub fn for_density(density: f64) -> Self {
        let density = density.clamp(0.0, 0.4);
        let spacing = (HALFTONE_MAX_SPACING - (density * 20.0).floor() as i64).max(1) as u32;
        let radius = (spacing / 4).max(1);
        Self {
            spacing,
            radius,
            opacity: (0.15 + density * 0.25) as f32,
        }
    }

    /// Dot centers covering a `width` x `height` canvas, row by row
    pub fn centers(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let step = self.spacing as usize;
        (self.radius..height)
            .step_by(step)
            .flat_map(|y| (self.radius..width).step_by(step).map(move |x| (x, y)))
            .collect()
    }
}

/// Draw the dot lattice for `density` onto `target`
pub fn draw_halftone(target: &mut Pixmap, density: f64) {
    let lattice = HalftoneLattice::for_density(density);
    let mut pb = PathBuilder::new();
    for (x, y) in lattice.centers(target.width(), target.height()) {
        pb.push_circle(x as f32, y as f32, lattice.radius as f32);
    }
    let Some(path) = pb.finish() else {
        return;
    };
    let paint = ink(lattice.opacity, BlendMode::SourceOver);
    target.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}
