//! Poster-style image stylization with reference-driven style profiles
//!
//! A source image is posterized, inked with thickened outlines and overlaid with
//! halftone dots, sunburst rays and decorative motifs. Reference images can be
//! analyzed into a style profile whose palette and suggested parameters drive
//! later stylizations.

#![forbid(unsafe_code)]

/// Palette clustering, reference statistics and parameter suggestion
pub mod analysis;
/// RGB/HSL color model
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Statistical helpers
pub mod math;
/// Stage ordering and the stylize entry point
pub mod pipeline;
/// Pixel buffers and per-pixel stages
pub mod raster;
/// Vector overlays drawn with tiny-skia
pub mod synth;

pub use analysis::{StyleProfile, analyze, analyze_with_rng};
pub use color::Rgb;
pub use io::error::{Result, StyleError};
pub use pipeline::{MotifPack, ParameterSet, stylize, stylize_with_rng};
pub use raster::PixelBuffer;
