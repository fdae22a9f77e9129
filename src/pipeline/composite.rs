//! The fixed stylization recipe: background, burst, posterized base, motifs,
//! inked edges and halftone, with an optional palette transfer at the end
//!
//! Every call recomputes the whole chain from the source buffer. The only
//! randomness comes from the flame and spiral motif packs; with any other
//! pack, identical inputs always produce identical output.

use crate::color::Rgb;
use crate::io::configuration::{BACKGROUND_FILL, EDGE_LAYER_OPACITY};
use crate::io::error::Result;
use crate::pipeline::params::ParameterSet;
use crate::raster::buffer::PixelBuffer;
use crate::raster::edges::{detect_edges, thicken};
use crate::raster::posterize::posterize;
use crate::raster::transfer::transfer_palette;
use crate::synth::burst::draw_burst;
use crate::synth::halftone::draw_halftone;
use crate::synth::layer::surface;
use crate::synth::motifs::draw_motifs;
use rand::Rng;
use tiny_skia::{BlendMode, Color, FilterQuality, Pixmap, PixmapPaint, Transform};
use tracing::{debug, warn};

/// Steps of the composite, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Start from a fully transparent surface
    ClearTarget,
    /// Opaque light gray, skipped for transparent backgrounds
    BackgroundFill,
    /// Multiplied sunburst rays
    BurstLayer,
    /// Posterized copy of the source
    PosterizedBase,
    /// Multiplied motif shapes
    MotifLayer,
    /// Thickened ink lines from the source's edges
    EdgeLayer,
    /// Dot lattice, only when enabled
    HalftoneLayer,
}

/// Stage order of every stylization pass
pub const STAGE_ORDER: [Stage; 7] = [
    Stage::ClearTarget,
    Stage::BackgroundFill,
    Stage::BurstLayer,
    Stage::PosterizedBase,
    Stage::MotifLayer,
    Stage::EdgeLayer,
    Stage::HalftoneLayer,
];

/// Stylize `source` using the thread-local random generator for motifs
///
/// # Errors
///
/// Returns an error if a layer has different dimensions from the source or a
/// drawing surface cannot be allocated
pub fn stylize(
    source: &PixelBuffer,
    params: &ParameterSet,
    palette: Option<&[Rgb]>,
) -> Result<PixelBuffer> {
    let mut rng = rand::rng();
    stylize_with_rng(source, params, palette, &mut rng)
}

/// Stylize `source`, drawing motif randomness from `rng`
///
/// # Errors
///
/// Returns an error if a layer has different dimensions from the source or a
/// drawing surface cannot be allocated
pub fn stylize_with_rng<R: Rng>(
    source: &PixelBuffer,
    params: &ParameterSet,
    palette: Option<&[Rgb]>,
    rng: &mut R,
) -> Result<PixelBuffer> {
    let params = params.clamped();
    let (width, height) = source.dimensions();
    let mut target = surface(width, height)?;

    for stage in STAGE_ORDER {
        match stage {
            Stage::ClearTarget => {
                target.fill(Color::TRANSPARENT);
            }
            Stage::BackgroundFill => {
                if params.transparent_background {
                    continue;
                }
                let [r, g, b, a] = BACKGROUND_FILL;
                target.fill(Color::from_rgba8(r, g, b, a));
            }
            Stage::BurstLayer => {
                draw_burst(&mut target, params.effective_burst_strength());
            }
            Stage::PosterizedBase => {
                let base = posterize(
                    source,
                    params.poster_levels(),
                    params.effective_saturation_boost(),
                );
                composite_layer(&mut target, source, &base, 1.0)?;
            }
            Stage::MotifLayer => {
                draw_motifs(&mut target, params.motif_pack, params.style_intensity, rng);
            }
            Stage::EdgeLayer => {
                let mask = detect_edges(source, params.edge_threshold());
                let ink = thicken(&mask, params.outline_weight)?;
                composite_layer(&mut target, source, &ink, EDGE_LAYER_OPACITY)?;
            }
            Stage::HalftoneLayer => {
                if !params.halftone_enabled {
                    continue;
                }
                draw_halftone(&mut target, params.halftone_density);
            }
        }
        debug!(?stage, width, height, "stage complete");
    }

    let output = PixelBuffer::from_pixmap(&target)?;
    if !params.apply_palette_transfer {
        return Ok(output);
    }
    Ok(palette_post_pass(output, palette))
}

// Nearest-palette remap of the finished composite
fn palette_post_pass(output: PixelBuffer, palette: Option<&[Rgb]>) -> PixelBuffer {
    match palette {
        Some(colors) if !colors.is_empty() => {
            debug!(colors = colors.len(), "palette transfer");
            transfer_palette(&output, colors)
        }
        _ => {
            warn!("palette transfer requested without a palette, skipping");
            output
        }
    }
}

// Source-over a full-canvas layer after checking it matches the source size
fn composite_layer(
    target: &mut Pixmap,
    source: &PixelBuffer,
    layer: &PixelBuffer,
    opacity: f32,
) -> Result<()> {
    source.ensure_same_dimensions(layer)?;
    let pixmap = layer.to_pixmap()?;
    let paint = PixmapPaint {
        opacity,
        blend_mode: BlendMode::SourceOver,
        quality: FilterQuality::Nearest,
    };
    target.draw_pixmap(0, 0, pixmap.as_ref(), &paint, Transform::identity(), None);
    Ok(())
}
