//! Style profiles: palette and statistical fingerprint of a reference set
//!
//! Each reference is reduced to at most `ANALYSIS_MAX_SIDE` pixels on its
//! longer side, sampled at a uniform stride, and summarized on its own. The
//! per-image summaries are then averaged and all samples are pooled into a
//! single palette extraction. A reference contributes either fully or not at
//! all, so analysis can stop between images without leaving partial state.

use crate::analysis::advisor::{ProfileStatistics, suggest_parameters};
use crate::analysis::kmeans::extract_palette_with_rng;
use crate::color::{Rgb, to_hsl};
use crate::io::configuration::{
    ANALYSIS_MAX_SIDE, KMEANS_ITERATIONS, PALETTE_SIZE, PROFILE_EDGE_THRESHOLD, SAMPLES_PER_IMAGE,
};
use crate::io::error::{Result, StyleError, malformed_profile};
use crate::math::stats::{mean, std_dev};
use crate::pipeline::params::ParameterSet;
use crate::raster::buffer::PixelBuffer;
use crate::raster::edges::{detect_edges, edge_density};
use image::imageops::FilterType;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Palette, statistics and suggested parameters derived from reference images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Display name
    pub name: String,
    /// Dominant colors, darkest first
    pub palette: Vec<Rgb>,
    /// Mean saturation across references
    pub mean_saturation: f64,
    /// Mean per-image saturation spread
    pub saturation_std: f64,
    /// Mean fraction of edge pixels
    pub edge_density: f64,
    /// Mean luminance standard deviation
    pub contrast_index: f64,
    /// Parameters recommended for this style
    pub suggested: ParameterSet,
}

impl StyleProfile {
    /// The four aggregate statistics
    pub const fn statistics(&self) -> ProfileStatistics {
        ProfileStatistics {
            mean_saturation: self.mean_saturation,
            saturation_std: self.saturation_std,
            edge_density: self.edge_density,
            contrast_index: self.contrast_index,
        }
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| StyleError::Serialization { source })
    }

    /// Decode and validate a profile from JSON
    ///
    /// # Errors
    ///
    /// Returns `MalformedProfile` if the text is not valid JSON, a field is
    /// missing, or any value lies outside its legal range
    pub fn from_json(text: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(text).map_err(|e| malformed_profile(&e))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check the palette is present and every number is in range
    ///
    /// # Errors
    ///
    /// Returns `MalformedProfile` describing the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(malformed_profile(&"palette is empty"));
        }
        let stats = [
            ("meanSaturation", self.mean_saturation),
            ("saturationStd", self.saturation_std),
            ("edgeDensity", self.edge_density),
            ("contrastIndex", self.contrast_index),
        ];
        for (name, value) in stats {
            if !(0.0..=1.0).contains(&value) {
                return Err(malformed_profile(&format!(
                    "{name} = {value} is outside [0, 1]"
                )));
            }
        }
        self.suggested.validate()
    }
}

/// Contribution of a single reference image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    /// Statistics of this image alone
    pub statistics: ProfileStatistics,
    /// Colors sampled for palette extraction
    pub samples: Vec<Rgb>,
}

impl ImageAnalysis {
    /// Downsample, sample and summarize one reference
    ///
    /// # Errors
    ///
    /// Returns an error if the downsampled buffer cannot be built
    pub fn of(reference: &PixelBuffer) -> Result<Self> {
        let reduced = downsample(reference, ANALYSIS_MAX_SIDE)?;
        let samples = stride_samples(&reduced, SAMPLES_PER_IMAGE);

        let saturation: Vec<f64> = samples.iter().map(|c| to_hsl(*c).s).collect();
        let lightness: Vec<f64> = samples.iter().map(|c| c.luminance() / 255.0).collect();
        let mask = detect_edges(&reduced, PROFILE_EDGE_THRESHOLD);

        let statistics = ProfileStatistics {
            mean_saturation: mean(&saturation),
            saturation_std: std_dev(&saturation),
            edge_density: edge_density(&mask),
            contrast_index: std_dev(&lightness),
        };
        debug!(
            width = reduced.width(),
            height = reduced.height(),
            samples = samples.len(),
            ?statistics,
            "reference analyzed"
        );
        Ok(Self {
            statistics,
            samples,
        })
    }
}

/// Build a profile from references using the thread-local random generator
///
/// # Errors
///
/// Returns `EmptyInput` when `references` is empty
pub fn analyze(name: &str, references: &[PixelBuffer]) -> Result<StyleProfile> {
    let mut rng = rand::rng();
    analyze_with_rng(name, references, &mut rng)
}

/// Build a profile from references, seeding palette extraction from `rng`
///
/// # Errors
///
/// Returns `EmptyInput` when `references` is empty
pub fn analyze_with_rng<R: Rng>(
    name: &str,
    references: &[PixelBuffer],
    rng: &mut R,
) -> Result<StyleProfile> {
    let analyses = references
        .iter()
        .map(ImageAnalysis::of)
        .collect::<Result<Vec<_>>>()?;
    aggregate(name, analyses, rng)
}

/// Average per-image statistics and extract one palette from the pooled samples
///
/// # Errors
///
/// Returns `EmptyInput` when `analyses` is empty
pub fn aggregate<R: Rng>(
    name: &str,
    analyses: Vec<ImageAnalysis>,
    rng: &mut R,
) -> Result<StyleProfile> {
    if analyses.is_empty() {
        return Err(StyleError::EmptyInput {
            operation: "profile analysis",
        });
    }

    let collect = |f: fn(&ProfileStatistics) -> f64| -> Vec<f64> {
        analyses.iter().map(|a| f(&a.statistics)).collect()
    };
    let statistics = ProfileStatistics {
        mean_saturation: mean(&collect(|s| s.mean_saturation)),
        saturation_std: mean(&collect(|s| s.saturation_std)),
        edge_density: mean(&collect(|s| s.edge_density)),
        contrast_index: mean(&collect(|s| s.contrast_index)),
    };

    let reference_count = analyses.len();
    let pool: Vec<Rgb> = analyses.into_iter().flat_map(|a| a.samples).collect();
    let palette = extract_palette_with_rng(&pool, PALETTE_SIZE, KMEANS_ITERATIONS, rng);
    let suggested = suggest_parameters(&statistics, &palette);

    info!(
        profile = name,
        references = reference_count,
        samples = pool.len(),
        colors = palette.len(),
        "style profile created"
    );

    Ok(StyleProfile {
        name: name.to_string(),
        palette,
        mean_saturation: statistics.mean_saturation,
        saturation_std: statistics.saturation_std,
        edge_density: statistics.edge_density,
        contrast_index: statistics.contrast_index,
        suggested,
    })
}

/// Shrink so the longer side is at most `max_side`, keeping aspect ratio
///
/// # Errors
///
/// Returns an error if the resized image cannot be wrapped as a buffer
pub fn downsample(buffer: &PixelBuffer, max_side: u32) -> Result<PixelBuffer> {
    let (width, height) = buffer.dimensions();
    let longest = width.max(height);
    if longest <= max_side {
        return Ok(buffer.clone());
    }
    let scale = f64::from(max_side) / f64::from(longest);
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);
    let resized = image::imageops::resize(
        &buffer.to_rgba_image(),
        new_width,
        new_height,
        FilterType::Triangle,
    );
    PixelBuffer::from_rgba_image(resized)
}

/// Every n-th pixel's color, with n chosen so at most `cap` samples come back
pub fn stride_samples(buffer: &PixelBuffer, cap: usize) -> Vec<Rgb> {
    let stride = buffer.pixel_count().div_ceil(cap.max(1)).max(1);
    buffer
        .pixels()
        .step_by(stride)
        .map(|[r, g, b, _]| Rgb::new(r, g, b))
        .collect()
}
