//! Decode image files into pixel buffers and encode results back to disk

use crate::io::error::{Result, StyleError};
use crate::raster::buffer::PixelBuffer;
use std::path::Path;

/// Load any supported image file as an RGBA buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has a zero dimension
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| StyleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    PixelBuffer::from_rgba_image(img.to_rgba8())
}

/// Save a buffer as an image, format chosen by file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_pixel_buffer<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StyleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .to_rgba_image()
        .save(path)
        .map_err(|e| StyleError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
