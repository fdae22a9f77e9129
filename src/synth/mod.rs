//! Vector overlay synthesis
//!
//! Each overlay produces black-ink shapes and draws them onto a `tiny-skia`
//! surface with a fixed opacity and blend mode.

/// Radial sunburst rays
pub mod burst;
/// Halftone dot lattice
pub mod halftone;
/// Shared paints, strokes and shapes
pub mod layer;
/// Waves, flames and spirals
pub mod motifs;
