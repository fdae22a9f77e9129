//! Owned RGBA pixel buffer passed between pipeline stages
//!
//! Stages never mutate their input: each one reads a `&PixelBuffer` and hands
//! a freshly allocated buffer back to the caller. Conversions to `image` and
//! `tiny-skia` types exist so that blurring, resampling and vector drawing can
//! reuse those crates without leaking their types into stage signatures.

use crate::color::Rgb;
use crate::io::error::{Result, invalid_dimensions, render_error};
use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

/// Row-major RGBA buffer with straight (non-premultiplied) alpha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(
                width,
                height,
                &"width and height must be positive",
            ));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(invalid_dimensions(
                width,
                height,
                &format!("expected {expected} bytes, got {}", data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer where every pixel has the same RGBA value
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * 4).collect();
        Self::new(width, height, data)
    }

    /// Buffer of the same size as `self` holding `data`
    ///
    /// Stages use this to hand back output computed pixel-for-pixel from `self`.
    pub(crate) fn derive(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as RGBA arrays in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        rgba_chunks(&self.data)
    }

    /// RGBA value at `(x, y)`, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(offset..offset + 4)
            .and_then(|px| <[u8; 4]>::try_from(px).ok())
    }

    /// RGB value at `(x, y)`, `None` outside the buffer
    pub fn rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixel(x, y).map(|[r, g, b, _]| Rgb::new(r, g, b))
    }

    /// New buffer with `f` applied to every pixel's color, alpha passed through
    pub fn map_rgb(&self, mut f: impl FnMut(Rgb) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for [r, g, b, a] in rgba_chunks(&self.data) {
            let mapped = f(Rgb::new(r, g, b));
            data.extend_from_slice(&[mapped.r, mapped.g, mapped.b, a]);
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Fail unless `other` has the same dimensions as `self`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` describing both sizes on mismatch
    pub fn ensure_same_dimensions(&self, other: &Self) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(invalid_dimensions(
                other.width,
                other.height,
                &format!("expected {}x{} to match", self.width, self.height),
            ))
        }
    }

    /// Copy into an `image` crate buffer
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Take ownership of an `image` crate buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Premultiply into a `tiny-skia` surface for compositing
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be allocated
    pub fn to_pixmap(&self) -> Result<Pixmap> {
        let mut pixmap = Pixmap::new(self.width, self.height).ok_or_else(|| {
            render_error(
                "surface allocation",
                &format!("cannot allocate {}x{} surface", self.width, self.height),
            )
        })?;
        for (dst, [r, g, b, a]) in pixmap.pixels_mut().iter_mut().zip(rgba_chunks(&self.data)) {
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(pixmap)
    }

    /// Demultiply a `tiny-skia` surface back into straight RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if the surface has a zero dimension
    pub fn from_pixmap(pixmap: &Pixmap) -> Result<Self> {
        let mut data = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Self::new(pixmap.width(), pixmap.height(), data)
    }
}

// Whole RGBA pixels of a byte slice; a trailing partial pixel is ignored
fn rgba_chunks(data: &[u8]) -> impl Iterator<Item = [u8; 4]> + '_ {
    data.chunks_exact(4)
        .filter_map(|px| <[u8; 4]>::try_from(px).ok())
}
