//! Per-pixel raster stages
//!
//! This module contains the stages that read one buffer and write another:
//! - The shared RGBA buffer type
//! - Posterization with saturation boost
//! - Sobel edge masks and their thickening
//! - Nearest-palette color transfer

/// Owned RGBA buffer and conversions
pub mod buffer;
/// Edge detection and ink thickening
pub mod edges;
/// Saturation boost and level quantization
pub mod posterize;
/// Palette-based color transfer
pub mod transfer;

pub use buffer::PixelBuffer;
