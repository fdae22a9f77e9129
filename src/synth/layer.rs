//! Ink paints, strokes and path helpers shared by the vector layers

use crate::io::error::{Result, render_error};
use tiny_skia::{BlendMode, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke};

/// A single vector shape in black ink
#[derive(Debug, Clone)]
pub enum InkShape {
    /// Outline drawn with a round-capped stroke of the given width
    Stroke {
        /// Geometry to stroke
        path: Path,
        /// Stroke width in pixels
        width: f32,
    },
    /// Closed silhouette filled solid
    Fill {
        /// Geometry to fill
        path: Path,
    },
}

/// Allocate a transparent surface
///
/// # Errors
///
/// Returns an error if either dimension is zero or the allocation fails
pub fn surface(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height).ok_or_else(|| {
        render_error(
            "surface allocation",
            &format!("cannot allocate {width}x{height} surface"),
        )
    })
}

/// Anti-aliased black paint at `opacity` using `blend_mode`
pub fn ink(opacity: f32, blend_mode: BlendMode) -> Paint<'static> {
    let mut paint = Paint::default();
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    paint.set_color_rgba8(0, 0, 0, alpha);
    paint.anti_alias = true;
    paint.blend_mode = blend_mode;
    paint
}

/// Round-capped stroke style
pub fn stroke_style(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

/// Open path through `points`, `None` with fewer than two points
pub fn polyline(points: &[(f32, f32)]) -> Option<Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    pb.finish()
}

/// Draw every shape onto `target` with the same paint
pub fn draw_shapes(target: &mut Pixmap, shapes: &[InkShape], paint: &Paint<'_>) {
    let transform = tiny_skia::Transform::identity();
    for shape in shapes {
        match shape {
            InkShape::Stroke { path, width } => {
                target.stroke_path(path, paint, &stroke_style(*width), transform, None);
            }
            InkShape::Fill { path } => {
                target.fill_path(path, paint, tiny_skia::FillRule::Winding, transform, None);
            }
        }
    }
}
